//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Arithmetic Context: 算术运算（纯函数，无 I/O）

pub mod arithmetic;

pub use arithmetic::{ArithmeticError, BinaryOperands, Calculation, Resultado, UnaryOperand};
