//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::domain::ArithmeticError;

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// 操作数违反运算定义域
    #[error(transparent)]
    InvalidOperand(#[from] ArithmeticError),
}
