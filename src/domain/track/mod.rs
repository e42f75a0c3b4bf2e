//! Track Context - 曲目限界上下文
//!
//! 职责:
//! - 正在播放曲目的只读快照
//! - 原始艺人字符串解析（主艺人 / feat. 后缀）

mod artist_name;
mod value_objects;

pub use artist_name::parse_primary_artist;
pub use value_objects::{ArtistRef, TrackInfo};
