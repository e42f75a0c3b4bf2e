//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod artwork;
pub mod config_source;
pub mod http_client;
pub mod listenbrainz;
pub mod presence;

pub use artwork::*;
pub use config_source::*;
pub use http_client::*;
pub use listenbrainz::*;
pub use presence::*;
