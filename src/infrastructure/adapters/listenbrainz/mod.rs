//! ListenBrainz Adapter - Spotify track ID 查找

mod lookup_client;

pub use lookup_client::*;
