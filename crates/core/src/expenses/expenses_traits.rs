use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Returns the user's active expenses.
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;

    /// Returns every expense of the user in the category, including
    /// soft-deleted ones. Budget computations filter on `active` themselves.
    fn get_expenses_by_category(&self, user_id: &str, category_id: &str)
        -> Result<Vec<Expense>>;

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>>;

    async fn create_expense(&self, expense: Expense) -> Result<Expense>;
    async fn update_expense(&self, expense: Expense) -> Result<Expense>;
}

/// Trait for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expenses_by_category(&self, user_id: &str, category_id: &str)
        -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, user_id: &str, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
