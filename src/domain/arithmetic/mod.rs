//! Arithmetic Context - 算术限界上下文
//!
//! 职责:
//! - 操作数值对象
//! - 各运算的定义域校验与计算
//! - 运算结果的数值类型

mod calculation;
mod errors;
pub mod operations;
mod value_objects;

pub use calculation::Calculation;
pub use errors::ArithmeticError;
pub use value_objects::{BinaryOperands, Resultado, UnaryOperand};
