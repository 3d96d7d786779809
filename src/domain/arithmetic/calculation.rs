//! Arithmetic Context - Calculation
//!
//! 运算及其操作数的组合。操作数的元数由变体决定，
//! 一元运算不可能收到二元操作数。

use super::errors::ArithmeticError;
use super::operations;
use super::value_objects::{BinaryOperands, Resultado, UnaryOperand};

/// 一次待求值的运算
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Add(BinaryOperands),
    Subtract(BinaryOperands),
    Multiply(BinaryOperands),
    Divide(BinaryOperands),
    Power(BinaryOperands),
    Root(BinaryOperands),
    Modulus(BinaryOperands),
    Logarithm(BinaryOperands),
    Sine(UnaryOperand),
    Cosine(UnaryOperand),
    Factorial(UnaryOperand),
    /// 查询参数形式的整数阶乘
    FactorialOf(i64),
}

impl Calculation {
    /// 运算名（与路由名一致）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "sumar",
            Self::Subtract(_) => "restar",
            Self::Multiply(_) => "multiplicar",
            Self::Divide(_) => "dividir",
            Self::Power(_) => "potencia",
            Self::Root(_) => "raiz",
            Self::Modulus(_) => "modulo",
            Self::Logarithm(_) => "logaritmo",
            Self::Sine(_) => "seno",
            Self::Cosine(_) => "coseno",
            Self::Factorial(_) | Self::FactorialOf(_) => "factorial",
        }
    }

    /// 求值
    pub fn evaluate(&self) -> Result<Resultado, ArithmeticError> {
        let result: Resultado = match *self {
            Self::Add(BinaryOperands { a, b }) => operations::add(a, b).into(),
            Self::Subtract(BinaryOperands { a, b }) => operations::subtract(a, b).into(),
            Self::Multiply(BinaryOperands { a, b }) => operations::multiply(a, b).into(),
            Self::Divide(BinaryOperands { a, b }) => operations::divide(a, b)?.into(),
            Self::Power(BinaryOperands { a, b }) => operations::power(a, b).into(),
            Self::Root(BinaryOperands { a, b }) => operations::root(a, b)?.into(),
            Self::Modulus(BinaryOperands { a, b }) => operations::modulus(a, b)?.into(),
            Self::Logarithm(BinaryOperands { a, b }) => operations::logarithm(a, b)?.into(),
            Self::Sine(UnaryOperand { a }) => operations::sine(a).into(),
            Self::Cosine(UnaryOperand { a }) => operations::cosine(a).into(),
            Self::Factorial(UnaryOperand { a }) => operations::factorial(a)?.into(),
            Self::FactorialOf(n) => operations::factorial_int(n)?.into(),
        };
        Ok(result)
    }
}
