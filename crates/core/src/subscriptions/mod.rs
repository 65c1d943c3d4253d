//! Subscriptions module - the static provider/plan price catalog.

mod subscriptions_model;
mod subscriptions_service;

pub use subscriptions_model::{SubscriptionPlan, SubscriptionProvider};
pub use subscriptions_service::{catalog, expense_template, find_plan, find_provider};
