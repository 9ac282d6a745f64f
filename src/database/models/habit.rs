use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{FieldValue, Resource};
use crate::api::validate::{into_result, require_non_blank, FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HabitFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Validate for HabitFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "title", &self.title);
        into_result(errors)
    }
}

impl Resource for Habit {
    type Fields = HabitFields;

    const TABLE: &'static str = "habits";
    const LABEL: &'static str = "Habit";
    const COLUMNS: &'static [&'static str] = &["title", "description", "is_active"];

    fn values(fields: HabitFields) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(Some(fields.title)),
            FieldValue::Text(fields.description),
            FieldValue::Flag(fields.is_active),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habits_start_active() {
        let fields: HabitFields = serde_json::from_str(r#"{"title":"stretch"}"#).unwrap();
        assert!(fields.is_active);
    }
}
