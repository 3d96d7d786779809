//! Arithmetic HTTP Handlers
//!
//! 每个端点只负责提取操作数并构造 [`Calculation`]，
//! 格式错误统一在提取阶段转为 422。

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::Calculate;
use crate::domain::{BinaryOperands, Calculation, UnaryOperand};
use crate::infrastructure::http::dto::{FactorialQuery, ResultadoResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type QueryParams<T> = Result<Query<T>, QueryRejection>;
type CalcResult = Result<Json<ResultadoResponse>, ApiError>;
type CreatedResult = Result<(StatusCode, Json<ResultadoResponse>), ApiError>;

fn calculate(state: &AppState, calculation: Calculation) -> CalcResult {
    let resultado = state
        .calculate_handler
        .handle(Calculate::from(calculation))?;
    Ok(Json(resultado.into()))
}

fn created(state: &AppState, calculation: Calculation) -> CreatedResult {
    Ok((StatusCode::CREATED, calculate(state, calculation)?))
}

// ============================================================================
// GET（查询参数）
// ============================================================================

/// 加法: `GET /sumar?a=&b=`
pub async fn sumar(
    State(state): State<Arc<AppState>>,
    params: QueryParams<BinaryOperands>,
) -> CalcResult {
    let Query(operands) = params?;
    calculate(&state, Calculation::Add(operands))
}

/// 减法: `GET /restar?a=&b=`
pub async fn restar(
    State(state): State<Arc<AppState>>,
    params: QueryParams<BinaryOperands>,
) -> CalcResult {
    let Query(operands) = params?;
    calculate(&state, Calculation::Subtract(operands))
}

/// 整数阶乘: `GET /factorial?n=`
pub async fn factorial_query(
    State(state): State<Arc<AppState>>,
    params: QueryParams<FactorialQuery>,
) -> CalcResult {
    let Query(FactorialQuery { n }) = params?;
    calculate(&state, Calculation::FactorialOf(n))
}

// ============================================================================
// POST（JSON 请求体）
// ============================================================================

/// 乘法，返回 201
pub async fn multiplicar(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CreatedResult {
    let Json(operands) = body?;
    created(&state, Calculation::Multiply(operands))
}

/// 除法，除数为 0 时返回 400
pub async fn dividir(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CalcResult {
    let Json(operands) = body?;
    calculate(&state, Calculation::Divide(operands))
}

/// 幂运算，返回 201
pub async fn potencia(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CreatedResult {
    let Json(operands) = body?;
    created(&state, Calculation::Power(operands))
}

pub async fn raiz(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CalcResult {
    let Json(operands) = body?;
    calculate(&state, Calculation::Root(operands))
}

pub async fn modulo(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CalcResult {
    let Json(operands) = body?;
    calculate(&state, Calculation::Modulus(operands))
}

/// 对数（近似算法）
pub async fn logaritmo(
    State(state): State<Arc<AppState>>,
    body: JsonBody<BinaryOperands>,
) -> CalcResult {
    let Json(operands) = body?;
    calculate(&state, Calculation::Logarithm(operands))
}

pub async fn seno(
    State(state): State<Arc<AppState>>,
    body: JsonBody<UnaryOperand>,
) -> CalcResult {
    let Json(operand) = body?;
    calculate(&state, Calculation::Sine(operand))
}

pub async fn coseno(
    State(state): State<Arc<AppState>>,
    body: JsonBody<UnaryOperand>,
) -> CalcResult {
    let Json(operand) = body?;
    calculate(&state, Calculation::Cosine(operand))
}

/// 阶乘: `POST /factorial` `{"a": ...}`
pub async fn factorial(
    State(state): State<Arc<AppState>>,
    body: JsonBody<UnaryOperand>,
) -> CalcResult {
    let Json(operand) = body?;
    calculate(&state, Calculation::Factorial(operand))
}
