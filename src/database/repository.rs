use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{FieldValue, Resource};

/// Owner-scoped CRUD over one resource table.
///
/// Every statement filters on `user_id`, so a row owned by someone else is
/// indistinguishable from a row that does not exist.
pub struct Repository<T> {
    pool: SqlitePool,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T: Resource> Repository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn create(&self, fields: T::Fields, owner_id: i64) -> Result<T, DatabaseError> {
        let columns = T::COLUMNS.join(", ");
        let placeholders = vec!["?"; T::COLUMNS.len() + 3].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}, user_id, created_at, updated_at) VALUES ({}) RETURNING *",
            T::TABLE,
            columns,
            placeholders
        );

        let now = Utc::now();
        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in T::values(fields) {
            query = match value {
                FieldValue::Text(v) => query.bind(v),
                FieldValue::Flag(v) => query.bind(v),
            };
        }

        let row = query
            .bind(owner_id)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE user_id = ? ORDER BY id", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64, owner_id: i64) -> Result<T, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = ? AND user_id = ?", T::TABLE);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Overwrite every mutable column in a single statement.
    pub async fn update(&self, id: i64, fields: T::Fields, owner_id: i64) -> Result<T, DatabaseError> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ? WHERE id = ? AND user_id = ? RETURNING *",
            T::TABLE,
            assignments
        );

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in T::values(fields) {
            query = match value {
                FieldValue::Text(v) => query.bind(v),
                FieldValue::Flag(v) => query.bind(v),
            };
        }

        query
            .bind(Utc::now())
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(Self::not_found)
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ? AND user_id = ?", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found());
        }
        Ok(())
    }

    fn not_found() -> DatabaseError {
        DatabaseError::NotFound(format!("{} not found", T::LABEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::models::{Habit, HabitFields, Note, NoteFields, Task, TaskFields};
    use crate::database::DatabaseManager;

    async fn pool_with_users(names: &[&str]) -> (SqlitePool, Vec<i64>) {
        let db = DatabaseManager::connect(&AppConfig::testing().database).await.unwrap();
        let mut ids = Vec::new();
        for name in names {
            let (id,): (i64,) = sqlx::query_as(
                "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, 'x', ?) RETURNING id",
            )
            .bind(*name)
            .bind(format!("{}@example.com", name))
            .bind(Utc::now())
            .fetch_one(db.pool())
            .await
            .unwrap();
            ids.push(id);
        }
        (db.pool().clone(), ids)
    }

    fn task(title: &str) -> TaskFields {
        TaskFields {
            title: title.to_string(),
            description: None,
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips_fields() {
        let (pool, users) = pool_with_users(&["alice"]).await;
        let tasks = Repository::<Task>::new(pool);

        let created = tasks
            .create(
                TaskFields {
                    title: "buy milk".into(),
                    description: Some("2 litres".into()),
                    is_completed: false,
                },
                users[0],
            )
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.user_id, users[0]);

        let listed = tasks.list(users[0]).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "buy milk");
        assert_eq!(listed[0].description.as_deref(), Some("2 litres"));
        assert!(!listed[0].is_completed);
        assert_eq!(listed[0].created_at, created.created_at);
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner_in_insertion_order() {
        let (pool, users) = pool_with_users(&["alice", "bob"]).await;
        let tasks = Repository::<Task>::new(pool);

        tasks.create(task("a1"), users[0]).await.unwrap();
        tasks.create(task("b1"), users[1]).await.unwrap();
        tasks.create(task("a2"), users[0]).await.unwrap();

        let titles: Vec<String> = tasks.list(users[0]).await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let (pool, users) = pool_with_users(&["alice"]).await;
        let habits = Repository::<Habit>::new(pool);

        let created = habits
            .create(
                HabitFields {
                    title: "run".into(),
                    description: Some("5k".into()),
                    is_active: true,
                },
                users[0],
            )
            .await
            .unwrap();

        let updated = habits
            .update(
                created.id,
                HabitFields {
                    title: "walk".into(),
                    description: None,
                    is_active: false,
                },
                users[0],
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "walk");
        assert_eq!(updated.description, None);
        assert!(!updated.is_active);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = habits.get(created.id, users[0]).await.unwrap();
        assert_eq!(fetched.title, "walk");
        assert_eq!(fetched.description, None);
    }

    #[tokio::test]
    async fn foreign_rows_look_missing() {
        let (pool, users) = pool_with_users(&["alice", "bob"]).await;
        let notes = Repository::<Note>::new(pool);

        let note = notes
            .create(
                NoteFields {
                    title: "secret".into(),
                    content: Some("alice only".into()),
                },
                users[0],
            )
            .await
            .unwrap();

        let bob = users[1];
        assert!(matches!(notes.get(note.id, bob).await, Err(DatabaseError::NotFound(_))));
        assert!(matches!(
            notes
                .update(note.id, NoteFields { title: "pwned".into(), content: None }, bob)
                .await,
            Err(DatabaseError::NotFound(_))
        ));
        assert!(matches!(notes.delete(note.id, bob).await, Err(DatabaseError::NotFound(_))));
        assert!(notes.list(bob).await.unwrap().is_empty());

        // Untouched for the owner
        let still_there = notes.get(note.id, users[0]).await.unwrap();
        assert_eq!(still_there.title, "secret");
    }

    #[tokio::test]
    async fn delete_removes_row_once() {
        let (pool, users) = pool_with_users(&["alice"]).await;
        let tasks = Repository::<Task>::new(pool);

        let created = tasks.create(task("done soon"), users[0]).await.unwrap();
        tasks.delete(created.id, users[0]).await.unwrap();

        assert!(tasks.list(users[0]).await.unwrap().is_empty());
        assert!(matches!(
            tasks.delete(created.id, users[0]).await,
            Err(DatabaseError::NotFound(msg)) if msg == "Task not found"
        ));
    }

    #[tokio::test]
    async fn owner_must_exist() {
        let (pool, _) = pool_with_users(&[]).await;
        let tasks = Repository::<Task>::new(pool);

        let err = tasks.create(task("orphan"), 42).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Sqlx(_)));
    }
}
