use crate::budgets::{Budget, BudgetRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::notifications::{NotificationEvent, NotificationSink};
use crate::tracking::{evaluate_threshold_crossing, match_expenses};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    notification_sink: Arc<dyn NotificationSink>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        notification_sink: Arc<dyn NotificationSink>,
    ) -> Self {
        ExpenseService {
            expense_repository,
            budget_repository,
            category_repository,
            notification_sink,
        }
    }

    fn validate_input(amount: Decimal, description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if amount <= Decimal::zero() {
            return Err(ValidationError::NonPositiveAmount(amount).into());
        }
        Ok(())
    }

    fn resolve_category(&self, category_id: &Option<String>) -> Result<Option<Category>> {
        match category_id {
            Some(id) => self
                .category_repository
                .get_category_by_id(id)?
                .map(Some)
                .ok_or_else(|| Error::NotFound(format!("category {}", id))),
            None => Ok(None),
        }
    }

    /// The budget the expense counts toward, if any. The overlap validator
    /// guarantees at most one budget per user, category and period.
    fn matching_budget(
        &self,
        user_id: &str,
        category_id: &str,
        date: chrono::DateTime<Utc>,
    ) -> Result<Option<Budget>> {
        Ok(self
            .budget_repository
            .get_budgets(user_id)?
            .into_iter()
            .find(|b| b.category_id == category_id && b.contains(date)))
    }

    fn spent_toward(&self, user_id: &str, budget: &Budget) -> Result<Decimal> {
        let expenses = self
            .expense_repository
            .get_expenses_by_category(user_id, &budget.category_id)?;
        Ok(match_expenses(&expenses, budget)
            .iter()
            .map(|e| e.amount)
            .sum())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.expense_repository.get_expenses(user_id)
    }

    fn get_expenses_by_category(&self, user_id: &str, category_id: &str) -> Result<Vec<Expense>> {
        self.expense_repository
            .get_expenses_by_category(user_id, category_id)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.expense_repository
            .get_expense(user_id, expense_id)?
            .ok_or_else(|| Error::NotFound(format!("expense {}", expense_id)))
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        Self::validate_input(new_expense.amount, &new_expense.description)?;
        let category = self.resolve_category(&new_expense.category_id)?;

        // Capture the matched budget and its before-total in the same pass,
        // so the threshold decision reduces over exactly this insertion.
        // Two concurrent inserts can still read the same before-total;
        // serializing writes per budget period is the storage layer's
        // concern.
        let budget_state = match &category {
            Some(category) => {
                match self.matching_budget(user_id, &category.id, new_expense.date)? {
                    Some(budget) => {
                        let spent_before = self.spent_toward(user_id, &budget)?;
                        Some((budget, spent_before))
                    }
                    None => None,
                }
            }
            None => None,
        };

        let now = Utc::now();
        let expense = Expense {
            id: new_expense
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            category_id: category.as_ref().map(|c| c.id.clone()),
            amount: new_expense.amount,
            description: new_expense.description.trim().to_string(),
            date: new_expense.date,
            frequency: new_expense.frequency,
            active: true,
            // Reminders only make sense for recurring expenses.
            notify: new_expense.frequency.is_recurring() && new_expense.notify,
            note: new_expense.note,
            created_at: now,
            updated_at: now,
        };

        let created = self.expense_repository.create_expense(expense).await?;
        debug!("Created expense {} for user {}", created.id, user_id);

        self.notification_sink.emit(NotificationEvent::expense_recorded(
            created.description.clone(),
            created.amount,
        ));

        if let (Some((budget, spent_before)), Some(category)) = (budget_state, category) {
            if let Some(event) =
                evaluate_threshold_crossing(&budget, &category.name, spent_before, created.amount)
            {
                self.notification_sink.emit(event);
            }
        }

        Ok(created)
    }

    async fn update_expense(&self, user_id: &str, update: ExpenseUpdate) -> Result<Expense> {
        Self::validate_input(update.amount, &update.description)?;

        let current = self
            .expense_repository
            .get_expense(user_id, &update.id)?
            .ok_or_else(|| Error::NotFound(format!("expense {}", update.id)))?;

        let category = self.resolve_category(&update.category_id)?;

        let expense = Expense {
            id: current.id,
            user_id: current.user_id,
            category_id: category.map(|c| c.id),
            amount: update.amount,
            description: update.description.trim().to_string(),
            date: update.date,
            frequency: update.frequency,
            active: update.active,
            notify: update.frequency.is_recurring() && update.notify,
            note: update.note,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        self.expense_repository.update_expense(expense).await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let mut expense = self
            .expense_repository
            .get_expense(user_id, expense_id)?
            .ok_or_else(|| Error::NotFound(format!("expense {}", expense_id)))?;

        // Soft delete: the row stays, budget computations stop seeing it.
        expense.active = false;
        expense.updated_at = Utc::now();

        self.expense_repository.update_expense(expense).await?;
        debug!("Soft-deleted expense {} for user {}", expense_id, user_id);
        Ok(())
    }
}
