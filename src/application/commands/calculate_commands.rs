//! Calculate Commands

use crate::domain::Calculation;

/// 计算命令
#[derive(Debug, Clone, Copy)]
pub struct Calculate {
    pub calculation: Calculation,
}

impl From<Calculation> for Calculate {
    fn from(calculation: Calculation) -> Self {
        Self { calculation }
    }
}
