use crate::budgets::{Budget, BudgetRepositoryTrait, BudgetWithCategory};
use crate::categories::CategoryRepositoryTrait;
use crate::constants::{EXCEEDED_THRESHOLD, NEAR_LIMIT_THRESHOLD, PERCENT};
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::notifications::NotificationEvent;
use crate::tracking::tracking_model::{BudgetConsumption, BudgetProgress, BudgetStatus};
use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Selects the expenses that count toward a budget.
///
/// An expense matches when it is active, carries the budget's category, and
/// its date falls inside the budget period, both endpoints inclusive. An
/// absent budget end date means no upper bound.
pub fn match_expenses<'a>(expenses: &'a [Expense], budget: &Budget) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.active)
        .filter(|e| e.category_id.as_deref() == Some(budget.category_id.as_str()))
        .filter(|e| budget.contains(e.date))
        .collect()
}

/// Sums matched expenses against the budget amount and classifies the
/// result.
///
/// The returned percentage is unclamped. A non-positive budget amount
/// should be impossible (creation enforces `amount > 0`); if one slips in
/// through a data-integrity bug the percentage is reported as 0 instead of
/// dividing by zero.
pub fn compute_consumption(matched_expenses: &[&Expense], budget: &Budget) -> BudgetConsumption {
    let spent: Decimal = matched_expenses.iter().map(|e| e.amount).sum();
    let remaining = budget.amount - spent;

    let percentage = if budget.amount > Decimal::zero() {
        spent / budget.amount * PERCENT
    } else {
        warn!(
            "Budget {} has non-positive amount {}; reporting consumption as 0%",
            budget.id, budget.amount
        );
        Decimal::zero()
    };

    let status = if spent > budget.amount {
        BudgetStatus::Over
    } else if percentage >= NEAR_LIMIT_THRESHOLD {
        BudgetStatus::Near
    } else {
        BudgetStatus::Under
    };

    BudgetConsumption {
        spent,
        remaining,
        percentage,
        status,
    }
}

/// Decides whether inserting one new expense crosses a notification
/// threshold.
///
/// `spent_before` is the budget's matched total before the insertion; the
/// new expense must already be known to match the budget (same category,
/// date inside the period). At most one event is returned:
///
/// - near-limit, when the insertion moves consumption from below 90% into
///   the 90–100% band;
/// - exceeded, when it moves consumption from below 100% to 100% or past.
///
/// A threshold already crossed before this insertion never re-fires. When a
/// single expense jumps from below 90% straight past 100%, only the
/// exceeded event is emitted.
pub fn evaluate_threshold_crossing(
    budget: &Budget,
    category_name: &str,
    spent_before: Decimal,
    new_expense_amount: Decimal,
) -> Option<NotificationEvent> {
    if budget.amount <= Decimal::zero() {
        warn!(
            "Budget {} has non-positive amount {}; skipping threshold evaluation",
            budget.id, budget.amount
        );
        return None;
    }

    let spent_after = spent_before + new_expense_amount;
    let percent_before = spent_before / budget.amount * PERCENT;
    let percent_after = spent_after / budget.amount * PERCENT;

    if percent_before < NEAR_LIMIT_THRESHOLD
        && percent_after >= NEAR_LIMIT_THRESHOLD
        && percent_after < EXCEEDED_THRESHOLD
    {
        Some(NotificationEvent::budget_near_limit(
            category_name,
            budget.amount,
            budget.amount - spent_after,
        ))
    } else if percent_before < EXCEEDED_THRESHOLD && percent_after >= EXCEEDED_THRESHOLD {
        Some(NotificationEvent::budget_exceeded(
            category_name,
            budget.amount,
            spent_after - budget.amount,
        ))
    } else {
        None
    }
}

/// Trait defining the contract for the budget tracking read side.
pub trait BudgetTrackingServiceTrait: Send + Sync {
    fn get_budget_consumption(&self, user_id: &str, budget_id: &str) -> Result<BudgetConsumption>;
    fn get_progress_overview(&self, user_id: &str) -> Result<Vec<BudgetProgress>>;
}

/// Read-side consumption queries. Every screen that shows budget progress
/// goes through here, so matching and aggregation happen exactly one way.
pub struct BudgetTrackingService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl BudgetTrackingService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        BudgetTrackingService {
            budget_repository,
            expense_repository,
            category_repository,
        }
    }

    fn consumption_for(&self, user_id: &str, budget: &Budget) -> Result<BudgetConsumption> {
        let expenses = self
            .expense_repository
            .get_expenses_by_category(user_id, &budget.category_id)?;
        let matched = match_expenses(&expenses, budget);
        Ok(compute_consumption(&matched, budget))
    }
}

impl BudgetTrackingServiceTrait for BudgetTrackingService {
    fn get_budget_consumption(&self, user_id: &str, budget_id: &str) -> Result<BudgetConsumption> {
        let budget = self
            .budget_repository
            .get_budget(user_id, budget_id)?
            .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))?;

        self.consumption_for(user_id, &budget)
    }

    fn get_progress_overview(&self, user_id: &str) -> Result<Vec<BudgetProgress>> {
        debug!("Computing budget progress overview for user {}", user_id);

        let names: HashMap<String, String> = self
            .category_repository
            .get_categories()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let budgets = self.budget_repository.get_budgets(user_id)?;
        let mut progress = Vec::with_capacity(budgets.len());

        for budget in budgets {
            let consumption = self.consumption_for(user_id, &budget)?;
            let category_name = names
                .get(&budget.category_id)
                .cloned()
                .unwrap_or_else(|| budget.category_id.clone());

            progress.push(BudgetProgress {
                budget: BudgetWithCategory {
                    budget,
                    category_name,
                },
                consumption,
            });
        }

        Ok(progress)
    }
}
