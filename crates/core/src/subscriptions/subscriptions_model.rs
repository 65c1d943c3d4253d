use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One pricing tier of a subscription provider.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: String,
    /// Monthly price in the catalog currency.
    pub price: Decimal,
}

/// A subscription provider and its published plans.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProvider {
    pub name: String,
    pub plans: Vec<SubscriptionPlan>,
}

impl SubscriptionProvider {
    pub fn plan(&self, plan_name: &str) -> Option<&SubscriptionPlan> {
        self.plans
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(plan_name))
    }
}
