//! Notification event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Events emitted by core services that warrant a user-visible notification.
///
/// These events only state *that* something notification-worthy happened and
/// carry the data needed to render it. Rendering the text and delivering it
/// to the device are platform adapters' concerns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A new expense was recorded.
    ExpenseRecorded {
        description: String,
        amount: Decimal,
    },

    /// A new expense pushed a budget's consumption past 90% of its amount
    /// while staying under the limit.
    BudgetNearLimit {
        category_name: String,
        budget_amount: Decimal,
        remaining: Decimal,
    },

    /// A new expense pushed a budget's consumption past its amount.
    BudgetExceeded {
        category_name: String,
        budget_amount: Decimal,
        excess: Decimal,
    },
}

impl NotificationEvent {
    /// Creates an ExpenseRecorded event.
    pub fn expense_recorded(description: impl Into<String>, amount: Decimal) -> Self {
        Self::ExpenseRecorded {
            description: description.into(),
            amount,
        }
    }

    /// Creates a BudgetNearLimit event.
    pub fn budget_near_limit(
        category_name: impl Into<String>,
        budget_amount: Decimal,
        remaining: Decimal,
    ) -> Self {
        Self::BudgetNearLimit {
            category_name: category_name.into(),
            budget_amount,
            remaining,
        }
    }

    /// Creates a BudgetExceeded event.
    pub fn budget_exceeded(
        category_name: impl Into<String>,
        budget_amount: Decimal,
        excess: Decimal,
    ) -> Self {
        Self::BudgetExceeded {
            category_name: category_name.into(),
            budget_amount,
            excess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_notification_event_serialization() {
        let event = NotificationEvent::budget_near_limit("Alimentación", dec!(200), dec!(20));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("budget_near_limit"));

        let deserialized: NotificationEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            NotificationEvent::BudgetNearLimit {
                category_name,
                budget_amount,
                remaining,
            } => {
                assert_eq!(category_name, "Alimentación");
                assert_eq!(budget_amount, dec!(200));
                assert_eq!(remaining, dec!(20));
            }
            _ => panic!("Expected BudgetNearLimit"),
        }
    }
}
