//! Calculadora - 无状态算术 HTTP 服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Arithmetic Context: 操作数、运算、定义域错误
//!
//! 应用层 (application/):
//! - Commands: 计算命令及处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 每个运算一个端点，CORS、请求日志

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
