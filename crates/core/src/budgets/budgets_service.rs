use crate::budgets::budgets_model::{Budget, BudgetUpdate, BudgetWithCategory, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, OverlapError, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Validates a candidate budget against the user's existing budgets.
///
/// Checks run in order: date range, positive amount, then period overlap
/// against every other budget with the same user and category. The first
/// failing check determines the returned error. An absent `end_date` is
/// treated as unbounded forward on either side of the comparison.
pub fn validate_budget_candidate(existing_budgets: &[Budget], candidate: &Budget) -> Result<()> {
    if let Some(end) = candidate.end_date {
        if candidate.start_date > end {
            return Err(ValidationError::InvalidDateRange {
                start: candidate.start_date,
                end,
            }
            .into());
        }
    }

    if candidate.amount <= Decimal::zero() {
        return Err(ValidationError::NonPositiveAmount(candidate.amount).into());
    }

    let peers = existing_budgets.iter().filter(|b| {
        b.user_id == candidate.user_id
            && b.category_id == candidate.category_id
            && b.id != candidate.id
    });

    for existing in peers {
        let starts_before_candidate_ends = candidate
            .end_date
            .map_or(true, |end| existing.start_date <= end);
        let ends_after_candidate_starts = existing
            .end_date
            .map_or(true, |end| end >= candidate.start_date);

        if starts_before_candidate_ends && ends_after_candidate_starts {
            return Err(Error::Overlap(OverlapError {
                category_id: candidate.category_id.clone(),
                conflicting_budget_id: existing.id.clone(),
            }));
        }
    }

    Ok(())
}

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            category_repository,
        }
    }

    fn category_names(&self) -> Result<HashMap<String, String>> {
        Ok(self
            .category_repository
            .get_categories()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect())
    }

    fn with_category(&self, budget: Budget, names: &HashMap<String, String>) -> BudgetWithCategory {
        let category_name = names
            .get(&budget.category_id)
            .cloned()
            .unwrap_or_else(|| budget.category_id.clone());
        BudgetWithCategory {
            budget,
            category_name,
        }
    }

    fn require_category(&self, category_id: &str) -> Result<()> {
        self.category_repository
            .get_category_by_id(category_id)?
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("category {}", category_id)))
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithCategory>> {
        let names = self.category_names()?;
        let budgets = self.budget_repository.get_budgets(user_id)?;
        Ok(budgets
            .into_iter()
            .map(|b| self.with_category(b, &names))
            .collect())
    }

    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<BudgetWithCategory> {
        let budget = self
            .budget_repository
            .get_budget(user_id, budget_id)?
            .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))?;
        let names = self.category_names()?;
        Ok(self.with_category(budget, &names))
    }

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        self.require_category(&new_budget.category_id)?;

        let now = Utc::now();
        let budget = Budget {
            id: new_budget
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            category_id: new_budget.category_id,
            amount: new_budget.amount,
            start_date: new_budget.start_date,
            end_date: new_budget.end_date,
            created_at: now,
            updated_at: now,
        };

        let existing = self.budget_repository.get_budgets(user_id)?;
        validate_budget_candidate(&existing, &budget)?;

        debug!(
            "Creating budget {} for category {}",
            budget.id, budget.category_id
        );
        self.budget_repository.create_budget(budget).await
    }

    async fn update_budget(&self, user_id: &str, update: BudgetUpdate) -> Result<Budget> {
        let current = self
            .budget_repository
            .get_budget(user_id, &update.id)?
            .ok_or_else(|| Error::NotFound(format!("budget {}", update.id)))?;

        self.require_category(&update.category_id)?;

        let budget = Budget {
            id: current.id,
            user_id: current.user_id,
            category_id: update.category_id,
            amount: update.amount,
            start_date: update.start_date,
            end_date: update.end_date,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        // The candidate's own id is skipped by the overlap check.
        let existing = self.budget_repository.get_budgets(user_id)?;
        validate_budget_candidate(&existing, &budget)?;

        self.budget_repository.update_budget(budget).await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        self.budget_repository
            .get_budget(user_id, budget_id)?
            .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))?;

        // Expenses are untouched; a deleted budget simply stops tracking them.
        self.budget_repository.delete_budget(user_id, budget_id).await
    }
}
