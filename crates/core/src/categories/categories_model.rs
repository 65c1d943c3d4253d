use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classification label shared across expenses and budgets.
///
/// Categories are global, not user-owned.
#[derive(PartialEq, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Stable lowercase identifier derived from the category name.
    ///
    /// Call sites resolve well-known categories through this slug instead
    /// of hardcoded numeric ids.
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Input for creating a new category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
