//! 应用层 - 命令
//!
//! 每个请求对应一条计算命令，处理器无共享可变状态

mod calculate_commands;

pub mod handlers;

pub use calculate_commands::*;
