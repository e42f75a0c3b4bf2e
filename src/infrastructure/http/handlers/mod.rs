//! HTTP Handlers

mod ping;
mod scheduler;
mod scrobbler;
mod spotify;
mod transport;

pub use ping::*;
pub use scheduler::*;
pub use scrobbler::*;
pub use spotify::*;
pub use transport::*;
