//! Infrastructure Layer - 基础设施层
//!
//! HTTP 服务器、路由与中间件

pub mod http;
