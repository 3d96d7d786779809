//! Calculate Command Handler

use crate::application::commands::Calculate;
use crate::application::error::ApplicationError;
use crate::domain::Resultado;

/// Calculate Handler
///
/// 无状态，可在任意数量的请求间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateHandler;

impl CalculateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: Calculate) -> Result<Resultado, ApplicationError> {
        let operation = command.calculation.name();

        match command.calculation.evaluate() {
            Ok(result) => {
                tracing::debug!(operation, resultado = %result, "Calculation completed");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "Invalid operand");
                Err(e.into())
            }
        }
    }
}
