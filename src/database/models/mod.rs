pub mod habit;
pub mod note;
pub mod task;
pub mod user;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow};

use crate::api::validate::Validate;

pub use habit::{Habit, HabitFields};
pub use note::{Note, NoteFields};
pub use task::{Task, TaskFields};
pub use user::{User, UserProfile};

/// A value bound to one mutable column of a resource table.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Flag(bool),
}

/// A user-owned table with the standard `id`, `user_id`, `created_at` and
/// `updated_at` columns plus a resource-specific set of mutable columns.
///
/// `COLUMNS` and `values` must line up: the n-th value is written to the
/// n-th column on both insert and update.
pub trait Resource:
    for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// Client-supplied body for create and full-replace update.
    type Fields: DeserializeOwned + Validate + Send + 'static;

    const TABLE: &'static str;
    /// Human label used in error messages, e.g. "Task".
    const LABEL: &'static str;
    const COLUMNS: &'static [&'static str];

    fn values(fields: Self::Fields) -> Vec<FieldValue>;
}
