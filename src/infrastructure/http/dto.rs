//! Data Transfer Objects
//!
//! 请求体直接使用领域值对象（`BinaryOperands` / `UnaryOperand`），
//! 这里只放 HTTP 专用的结构。

use serde::{Deserialize, Serialize};

use crate::domain::Resultado;

/// 计算成功响应: `{"resultado": ...}`
#[derive(Debug, Serialize)]
pub struct ResultadoResponse {
    pub resultado: Resultado,
}

impl From<Resultado> for ResultadoResponse {
    fn from(resultado: Resultado) -> Self {
        Self { resultado }
    }
}

/// `GET /factorial?n=` 的查询参数
#[derive(Debug, Deserialize)]
pub struct FactorialQuery {
    pub n: i64,
}
