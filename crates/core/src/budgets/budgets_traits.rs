use crate::budgets::budgets_model::{Budget, BudgetUpdate, BudgetWithCategory, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;

    async fn create_budget(&self, budget: Budget) -> Result<Budget>;
    async fn update_budget(&self, budget: Budget) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithCategory>>;
    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<BudgetWithCategory>;

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(&self, user_id: &str, update: BudgetUpdate) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}
