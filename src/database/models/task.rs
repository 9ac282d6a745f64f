use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{FieldValue, Resource};
use crate::api::validate::{into_result, require_non_blank, FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Validate for TaskFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "title", &self.title);
        into_result(errors)
    }
}

impl Resource for Task {
    type Fields = TaskFields;

    const TABLE: &'static str = "tasks";
    const LABEL: &'static str = "Task";
    const COLUMNS: &'static [&'static str] = &["title", "description", "is_completed"];

    fn values(fields: TaskFields) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(Some(fields.title)),
            FieldValue::Text(fields.description),
            FieldValue::Flag(fields.is_completed),
        ]
    }
}
