use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::User;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

/// Credential store over the `users` table.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DatabaseError> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DatabaseError> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Single-statement insert. The UNIQUE constraints on `username` and
    /// `email` are the final arbiter when two registrations race.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, ?, ?) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::DatabaseManager;

    async fn store() -> UserStore {
        let db = DatabaseManager::connect(&AppConfig::testing().database).await.unwrap();
        UserStore::new(db.pool().clone())
    }

    #[tokio::test]
    async fn insert_and_find() {
        let users = store().await;
        assert!(!users.email_exists("a@x.com").await.unwrap());
        let created = users.insert("alice", "a@x.com", "hash").await.unwrap();
        assert!(users.email_exists("a@x.com").await.unwrap());
        assert!(users.username_exists("alice").await.unwrap());

        let by_email = users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_email.password_hash, "hash");

        let by_id = users.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
        assert!(users.find_by_id(created.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let users = store().await;
        users.insert("alice", "a@x.com", "hash").await.unwrap();
        let err = users.insert("alice2", "a@x.com", "hash").await.unwrap_err();
        assert!(err.is_unique_violation());
        assert!(err.to_string().contains("users.email"));
    }

    #[tokio::test]
    async fn duplicate_username_names_the_column() {
        let users = store().await;
        users.insert("alice", "a@x.com", "hash").await.unwrap();
        let err = users.insert("alice", "b@x.com", "hash").await.unwrap_err();
        assert!(err.is_unique_violation());
        assert!(err.to_string().contains("users.username"));
    }
}
