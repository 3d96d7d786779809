//! HTTP Routes
//!
//! API Endpoints:
//! - /ping          GET   健康检查
//! - /sumar         GET   加法（查询参数 a, b）
//! - /restar        GET   减法（查询参数 a, b）
//! - /factorial     GET   整数阶乘（查询参数 n）
//! - /multiplicar   POST  乘法 (201)
//! - /dividir       POST  除法
//! - /potencia      POST  幂运算 (201)
//! - /raiz          POST  开方
//! - /modulo        POST  取余
//! - /logaritmo     POST  对数
//! - /seno          POST  正弦
//! - /coseno        POST  余弦
//! - /factorial     POST  阶乘（请求体 a）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/sumar", get(handlers::sumar))
        .route("/restar", get(handlers::restar))
        .route(
            "/factorial",
            get(handlers::factorial_query).post(handlers::factorial),
        )
        .route("/multiplicar", post(handlers::multiplicar))
        .route("/dividir", post(handlers::dividir))
        .route("/potencia", post(handlers::potencia))
        .route("/raiz", post(handlers::raiz))
        .route("/modulo", post(handlers::modulo))
        .route("/logaritmo", post(handlers::logaritmo))
        .route("/seno", post(handlers::seno))
        .route("/coseno", post(handlers::coseno))
        .fallback(handlers::not_found)
}
