use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a recurring expense repeats.
///
/// The integer codes match the persisted representation: 0 = none,
/// 1 = daily, 2 = weekly, 3 = monthly, 4 = yearly.
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum RecurrenceFrequency {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceFrequency {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RecurrenceFrequency::None),
            1 => Some(RecurrenceFrequency::Daily),
            2 => Some(RecurrenceFrequency::Weekly),
            3 => Some(RecurrenceFrequency::Monthly),
            4 => Some(RecurrenceFrequency::Yearly),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            RecurrenceFrequency::None => 0,
            RecurrenceFrequency::Daily => 1,
            RecurrenceFrequency::Weekly => 2,
            RecurrenceFrequency::Monthly => 3,
            RecurrenceFrequency::Yearly => 4,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceFrequency::None)
    }
}

/// A single recorded spending transaction, owned by exactly one user.
///
/// Expenses are soft-deleted: `active = false` keeps the row but removes it
/// from every budget computation.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
    pub frequency: RecurrenceFrequency,
    pub active: bool,
    pub notify: bool,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new expense.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub frequency: RecurrenceFrequency,
    #[serde(default)]
    pub notify: bool,
    #[serde(default)]
    pub note: String,
}

/// Input for updating an existing expense. Every field is rewritten.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
    pub frequency: RecurrenceFrequency,
    pub active: bool,
    pub notify: bool,
    pub note: String,
}
