//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：scrobbler 事件、调度回调、transport 事件

mod scheduler_commands;
mod scrobbler_commands;

pub mod handlers;

pub use scheduler_commands::*;
pub use scrobbler_commands::*;
