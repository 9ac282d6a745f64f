use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{FieldValue, Resource};
use crate::api::validate::{into_result, require_non_blank, FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteFields {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl Validate for NoteFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "title", &self.title);
        into_result(errors)
    }
}

impl Resource for Note {
    type Fields = NoteFields;

    const TABLE: &'static str = "notes";
    const LABEL: &'static str = "Note";
    const COLUMNS: &'static [&'static str] = &["title", "content"];

    fn values(fields: NoteFields) -> Vec<FieldValue> {
        vec![FieldValue::Text(Some(fields.title)), FieldValue::Text(fields.content)]
    }
}
