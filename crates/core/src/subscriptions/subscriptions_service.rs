use crate::errors::{Error, Result};
use crate::expenses::{NewExpense, RecurrenceFrequency};
use crate::subscriptions::subscriptions_model::{SubscriptionPlan, SubscriptionProvider};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;

/// Price catalog produced by the scraping job. Regenerating it replaces
/// this file; the crate never fetches prices at runtime.
const CATALOG_JSON: &str = include_str!("catalog.json");

lazy_static! {
    static ref CATALOG: Vec<SubscriptionProvider> =
        serde_json::from_str(CATALOG_JSON).expect("embedded subscription catalog is valid JSON");
}

/// Returns the full subscription price catalog.
pub fn catalog() -> &'static [SubscriptionProvider] {
    &CATALOG
}

/// Looks up a provider by name, case-insensitively.
pub fn find_provider(provider_name: &str) -> Option<&'static SubscriptionProvider> {
    CATALOG
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(provider_name))
}

/// Looks up one plan of one provider.
pub fn find_plan(provider_name: &str, plan_name: &str) -> Option<&'static SubscriptionPlan> {
    find_provider(provider_name).and_then(|p| p.plan(plan_name))
}

/// Builds the input for a monthly recurring expense from a catalog plan.
///
/// The caller resolves `category_id` through the category service (see
/// [`crate::constants::SUBSCRIPTIONS_CATEGORY_SLUG`]) and feeds the result
/// to the expense service, which applies the usual validation and threshold
/// evaluation.
pub fn expense_template(
    provider_name: &str,
    plan_name: &str,
    category_id: &str,
    start_date: DateTime<Utc>,
) -> Result<NewExpense> {
    let provider = find_provider(provider_name).ok_or_else(|| {
        Error::NotFound(format!("subscription provider {}", provider_name))
    })?;
    let plan = provider.plan(plan_name).ok_or_else(|| {
        Error::NotFound(format!(
            "plan {} of subscription provider {}",
            plan_name, provider_name
        ))
    })?;

    Ok(NewExpense {
        id: None,
        category_id: Some(category_id.to_string()),
        amount: plan.price,
        description: format!("{} - {}", provider.name, plan.name),
        date: start_date,
        frequency: RecurrenceFrequency::Monthly,
        notify: true,
        note: String::new(),
    })
}
