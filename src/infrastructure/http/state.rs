//! Application State
//!
//! 只包含无状态的命令处理器，请求之间没有共享可变数据

use crate::application::CalculateHandler;

/// 应用状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculate_handler: CalculateHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new() -> Self {
        Self {
            calculate_handler: CalculateHandler::new(),
        }
    }
}
