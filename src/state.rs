use std::sync::Arc;

use anyhow::Context;

use crate::auth::{PasswordHasher, TokenIssuer};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, Repository, UserStore};
use crate::database::models::Resource;
use crate::services::AuthService;

/// Everything a handler needs, shared across requests. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseManager,
    pub auth: AuthService,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    /// Open the database and build the credential services from `config`.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let tokens = Arc::new(TokenIssuer::from_config(&config.security).context("invalid token configuration")?);
        let hasher = Arc::new(PasswordHasher::from_config(&config.security).context("invalid password hash configuration")?);
        let db = DatabaseManager::connect(&config.database)
            .await
            .context("failed to open database")?;

        let auth = AuthService::new(UserStore::new(db.pool().clone()), hasher, Arc::clone(&tokens))
            .context("failed to initialise auth service")?;

        Ok(Self {
            config: Arc::new(config),
            db,
            auth,
            tokens,
        })
    }

    pub fn repository<R: Resource>(&self) -> Repository<R> {
        Repository::new(self.db.pool().clone())
    }
}
