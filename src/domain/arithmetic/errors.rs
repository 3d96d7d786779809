//! Arithmetic Context - Errors

use thiserror::Error;

/// 操作数违反运算定义域（InvalidOperand）
///
/// `Display` 输出即返回给调用方的 `detail` 文本
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("root index cannot be zero")]
    ZeroRootIndex,

    #[error("cannot compute modulus with zero divisor")]
    ZeroModulusDivisor,

    #[error("argument (a) must be greater than zero")]
    NonPositiveLogArgument,

    #[error("base (b) must be greater than zero and different from 1")]
    InvalidLogBase,

    #[error("factorial is not defined for negative numbers")]
    NegativeFactorial,

    #[error("factorial requires a finite number")]
    NonFiniteFactorial,

    #[error("factorial result exceeds the 64-bit integer range")]
    FactorialOverflow,
}
