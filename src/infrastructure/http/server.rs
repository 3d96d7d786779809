//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::{CorsConfig, ServerConfig};

/// 根据配置构建 CORS 层
///
/// 允许携带凭据时不能使用通配符，所以宽松模式回显请求的
/// Origin、方法和请求头。
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.is_permissive() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            config
                .allow_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_secs))
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    cors: CorsConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, cors: CorsConfig, state: AppState) -> Self {
        Self {
            config,
            cors,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    ///
    /// CORS 与其余中间件在启动时构建一次，之后不再修改
    pub fn build_router(&self) -> Router {
        create_routes()
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&self.cors))
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn server(cors: CorsConfig) -> HttpServer {
        HttpServer::new(ServerConfig::default(), cors, AppState::new())
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/dividir")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_permissive_cors_mirrors_origin_with_credentials() {
        let router = server(CorsConfig::default()).build_router();
        let response = router.oneshot(preflight("http://example.com")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://example.com"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    }

    #[tokio::test]
    async fn test_permissive_cors_on_actual_request() {
        let router = server(CorsConfig::default()).build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/dividir")
            .header(header::ORIGIN, "http://example.com")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"a": 6, "b": 3}"#))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://example.com"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_restricted_cors_rejects_unknown_origin() {
        let cors = CorsConfig {
            allow_origins: vec!["http://localhost:3000".to_string()],
            ..CorsConfig::default()
        };
        let router = server(cors).build_router();

        let response = router
            .clone()
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let response = router.oneshot(preflight("http://evil.test")).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_body_limit_applies() {
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let router = HttpServer::new(config, CorsConfig::default(), AppState::new()).build_router();

        let request = Request::builder()
            .method("POST")
            .uri("/dividir")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"a": 1.00000000000, "b": 2.0000000000}"#))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
