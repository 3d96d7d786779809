//! Command Handlers 实现

mod calculate_handlers;

pub use calculate_handlers::*;
