//! Query Handlers 实现

mod spotify_url_handlers;

pub use spotify_url_handlers::*;
