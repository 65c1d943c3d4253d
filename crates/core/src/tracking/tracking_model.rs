use crate::budgets::BudgetWithCategory;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, EXCEEDED_THRESHOLD};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a budget stands relative to its spending ceiling.
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    /// Below 90% of the budget amount.
    Under,
    /// At or past 90%, but not over the amount.
    Near,
    /// Spent more than the budget amount.
    Over,
}

/// Computed consumption of one budget.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConsumption {
    pub spent: Decimal,
    /// `amount - spent`; negative once the budget is exceeded.
    pub remaining: Decimal,
    /// Unclamped, so the exceeded magnitude stays visible to callers.
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

impl BudgetConsumption {
    /// Percentage clamped to 100 and rounded for display. The stored
    /// `percentage` stays unclamped.
    pub fn display_percentage(&self) -> Decimal {
        self.percentage
            .min(EXCEEDED_THRESHOLD)
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// A budget joined with its computed consumption, for overview screens.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    #[serde(flatten)]
    pub budget: BudgetWithCategory,
    pub consumption: BudgetConsumption,
}
