//! Command Handlers 实现

mod callback_handlers;
mod presence_handlers;

pub use callback_handlers::*;
pub use presence_handlers::*;
