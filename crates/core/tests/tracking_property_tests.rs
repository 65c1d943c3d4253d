//! Property-based tests for the budget tracking core.
//!
//! These tests verify that universal properties of the matcher, the
//! consumption aggregator, the threshold notifier, and the overlap
//! validator hold across randomly generated inputs, using the `proptest`
//! crate.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gastapp_core::budgets::{validate_budget_candidate, Budget};
use gastapp_core::expenses::{Expense, RecurrenceFrequency};
use gastapp_core::notifications::NotificationEvent;
use gastapp_core::tracking::{
    compute_consumption, evaluate_threshold_crossing, match_expenses, BudgetStatus,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Generates a positive amount with two decimal places, up to 10,000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a date within two years of the base date.
fn arb_date() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..730).prop_map(|days| base_date() + Duration::days(days))
}

/// Generates a category id from a small shared pool.
fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("food".to_string()),
        Just("transport".to_string()),
        Just("leisure".to_string()),
    ]
}

fn make_budget(
    id: &str,
    category_id: &str,
    amount: Decimal,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> Budget {
    Budget {
        id: id.to_string(),
        user_id: "user1".to_string(),
        category_id: category_id.to_string(),
        amount,
        start_date: start,
        end_date: end,
        created_at: base_date(),
        updated_at: base_date(),
    }
}

fn make_expense(id: String, category_id: String, amount: Decimal, date: DateTime<Utc>) -> Expense {
    Expense {
        id,
        user_id: "user1".to_string(),
        category_id: Some(category_id),
        amount,
        description: "generated".to_string(),
        date,
        frequency: RecurrenceFrequency::None,
        active: true,
        notify: false,
        note: String::new(),
        created_at: base_date(),
        updated_at: base_date(),
    }
}

/// Generates a budget with a bounded or open-ended period.
fn arb_budget() -> impl Strategy<Value = Budget> {
    (
        "[a-f0-9]{8}",
        arb_category(),
        arb_amount(),
        0i64..365,
        proptest::option::of(0i64..365),
    )
        .prop_map(|(id, category, amount, start_offset, length)| {
            let start = base_date() + Duration::days(start_offset);
            let end = length.map(|days| start + Duration::days(days));
            make_budget(&id, &category, amount, start, end)
        })
}

/// Generates an expense dated inside the given budget's period.
fn arb_matching_expense(budget: &Budget) -> impl Strategy<Value = Expense> {
    let category = budget.category_id.clone();
    let start = budget.start_date;
    let span = budget
        .end_date
        .map(|end| (end - start).num_days())
        .unwrap_or(365);
    ("[a-f0-9]{8}", arb_amount(), 0i64..=span).prop_map(move |(id, amount, offset)| {
        make_expense(
            id,
            category.clone(),
            amount,
            start + Duration::days(offset),
        )
    })
}

fn status_rank(status: BudgetStatus) -> u8 {
    match status {
        BudgetStatus::Under => 0,
        BudgetStatus::Near => 1,
        BudgetStatus::Over => 2,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An expense dated exactly on the budget's start or end date is
    /// always matched (both endpoints inclusive).
    #[test]
    fn prop_matcher_includes_boundary_dates(
        budget in arb_budget(),
        amount in arb_amount(),
    ) {
        let mut expenses = vec![make_expense(
            "on_start".to_string(),
            budget.category_id.clone(),
            amount,
            budget.start_date,
        )];
        if let Some(end) = budget.end_date {
            expenses.push(make_expense(
                "on_end".to_string(),
                budget.category_id.clone(),
                amount,
                end,
            ));
        }

        let matched = match_expenses(&expenses, &budget);
        prop_assert_eq!(matched.len(), expenses.len());
    }

    /// An expense in a different category is never matched, whatever its
    /// date.
    #[test]
    fn prop_matcher_isolates_categories(
        budget in arb_budget(),
        category in arb_category(),
        amount in arb_amount(),
        date in arb_date(),
    ) {
        prop_assume!(category != budget.category_id);

        let expenses = vec![make_expense("e1".to_string(), category, amount, date)];
        prop_assert!(match_expenses(&expenses, &budget).is_empty());
    }

    /// Spent totals are additive: aggregating a whole expense set equals
    /// the sum of aggregating any split of it.
    #[test]
    fn prop_aggregation_is_additive(
        (budget, expenses, split) in arb_budget().prop_flat_map(|budget| {
            let expense_vec = proptest::collection::vec(arb_matching_expense(&budget), 0..20);
            (Just(budget), expense_vec).prop_flat_map(|(budget, expenses)| {
                let len = expenses.len();
                (Just(budget), Just(expenses), 0..=len)
            })
        }),
    ) {
        let refs: Vec<&Expense> = expenses.iter().collect();
        let (left, right) = refs.split_at(split);

        let whole = compute_consumption(&refs, &budget);
        let left_part = compute_consumption(left, &budget);
        let right_part = compute_consumption(right, &budget);

        prop_assert_eq!(whole.spent, left_part.spent + right_part.spent);
    }

    /// Increasing a matched expense's amount never moves the status back
    /// toward Under.
    #[test]
    fn prop_status_is_monotone_in_amounts(
        (budget, mut expenses, index) in arb_budget().prop_flat_map(|budget| {
            let expense_vec = proptest::collection::vec(arb_matching_expense(&budget), 1..20);
            (Just(budget), expense_vec).prop_flat_map(|(budget, expenses)| {
                let len = expenses.len();
                (Just(budget), Just(expenses), 0..len)
            })
        }),
        increase in arb_amount(),
    ) {
        let before = {
            let matched = match_expenses(&expenses, &budget);
            compute_consumption(&matched, &budget)
        };

        expenses[index].amount += increase;

        let after = {
            let matched = match_expenses(&expenses, &budget);
            compute_consumption(&matched, &budget)
        };

        prop_assert!(status_rank(after.status) >= status_rank(before.status));
    }

    /// A budget already at or past 90% never fires the near-limit event
    /// again, whatever the new expense amount.
    #[test]
    fn prop_near_limit_fires_at_most_once(
        budget in arb_budget(),
        ratio_percent in 90i64..300,
        new_amount in arb_amount(),
    ) {
        let spent_before = budget.amount * Decimal::new(ratio_percent, 2);

        let event = evaluate_threshold_crossing(&budget, "category", spent_before, new_amount);

        let fired_near_limit = matches!(
            event,
            Some(NotificationEvent::BudgetNearLimit { .. })
        );
        prop_assert!(!fired_near_limit);
    }

    /// A zero-amount insertion never crosses a threshold.
    #[test]
    fn prop_zero_insertion_never_fires(
        budget in arb_budget(),
        ratio_percent in 0i64..300,
    ) {
        let spent_before = budget.amount * Decimal::new(ratio_percent, 2);

        let event =
            evaluate_threshold_crossing(&budget, "category", spent_before, Decimal::ZERO);

        prop_assert_eq!(event, None);
    }

    /// The overlap check is symmetric: budget A conflicts with existing B
    /// exactly when B conflicts with existing A.
    #[test]
    fn prop_overlap_is_symmetric(
        amount in arb_amount(),
        start_a in 0i64..365,
        length_a in proptest::option::of(0i64..365),
        start_b in 0i64..365,
        length_b in proptest::option::of(0i64..365),
    ) {
        let budget_a = make_budget(
            "a",
            "food",
            amount,
            base_date() + Duration::days(start_a),
            length_a.map(|days| base_date() + Duration::days(start_a + days)),
        );
        let budget_b = make_budget(
            "b",
            "food",
            amount,
            base_date() + Duration::days(start_b),
            length_b.map(|days| base_date() + Duration::days(start_b + days)),
        );

        let a_against_b = validate_budget_candidate(
            std::slice::from_ref(&budget_b),
            &budget_a,
        );
        let b_against_a = validate_budget_candidate(
            std::slice::from_ref(&budget_a),
            &budget_b,
        );

        prop_assert_eq!(a_against_b.is_err(), b_against_a.is_err());
    }
}
