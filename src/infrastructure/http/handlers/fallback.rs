//! 未匹配路由

use crate::infrastructure::http::error::ApiError;

/// 404，保持 `{"detail": ...}` 响应格式
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
