//! 应用层 - 用例编排
//!
//! 包含：
//! - commands: 计算命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;

pub use commands::{handlers::CalculateHandler, Calculate};
pub use error::ApplicationError;
