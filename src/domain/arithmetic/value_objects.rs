//! Arithmetic Context - Value Objects

use serde::{de, Deserialize, Deserializer, Serialize};

/// 操作数必须是有限浮点数，NaN / Inf 在解析阶段拒绝
fn finite<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom("operand must be a finite number"))
    }
}

/// 二元运算操作数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperands {
    #[serde(deserialize_with = "finite")]
    pub a: f64,
    #[serde(deserialize_with = "finite")]
    pub b: f64,
}

impl BinaryOperands {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// 一元运算操作数（正弦、余弦、阶乘）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperand {
    #[serde(deserialize_with = "finite")]
    pub a: f64,
}

impl UnaryOperand {
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

/// 运算结果
///
/// 阶乘返回整数，其余运算返回浮点数。
/// 非有限浮点数（NaN / Inf）由 serde_json 序列化为 `null`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resultado {
    Float(f64),
    Integer(i64),
}

impl From<f64> for Resultado {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Resultado {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl std::fmt::Display for Resultado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
        }
    }
}
