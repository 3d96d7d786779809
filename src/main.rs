//! Calculadora - 算术运算 HTTP 服务

use calculadora::config::{load_config, print_config, LogConfig};
use calculadora::infrastructure::http::{AppState, HttpServer};

/// 初始化日志，`RUST_LOG` 优先于配置文件
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},calculadora={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("API REST Calculadora v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let server = HttpServer::new(config.server, config.cors, AppState::new());

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
