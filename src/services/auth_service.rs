use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::validate::{into_result, is_plausible_email, require_max_len, require_non_blank, FieldErrors, Validate};
use crate::auth::{HashError, PasswordHasher, TokenError, TokenIssuer};
use crate::database::models::{User, UserProfile};
use crate::database::{DatabaseError, UserStore};

const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email already registered")]
    EmailTaken,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token subject does not resolve to a user")]
    UnknownUser,
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for Registration {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "username", &self.username);
        require_max_len(&mut errors, "username", self.username.trim(), MAX_USERNAME_LEN);
        if !is_plausible_email(self.email.trim()) {
            errors.insert("email".to_string(), "Must be a valid email address".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password".to_string(), "This field is required".to_string());
        }
        into_result(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.insert("password".to_string(), "This field is required".to_string());
        }
        into_result(errors)
    }
}

/// Token plus the public profile it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

/// Register, login and whoami over the credential store.
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenIssuer>,
    // Verified against when the email is unknown so both login failures cost the same.
    dummy_hash: Arc<String>,
}

impl AuthService {
    pub fn new(users: UserStore, hasher: Arc<PasswordHasher>, tokens: Arc<TokenIssuer>) -> Result<Self, AuthError> {
        let dummy_hash = Arc::new(hasher.hash("dashboard-dummy-password")?);
        Ok(Self {
            users,
            hasher,
            tokens,
            dummy_hash,
        })
    }

    pub async fn register(&self, registration: Registration) -> Result<AuthSession, AuthError> {
        let username = registration.username.trim().to_string();
        let email = normalize_email(&registration.email);
        info!(email = %email, username = %username, "Registration attempt");

        let password_hash = self.hash(registration.password).await?;

        // Email is reported before username when both are taken. A registration
        // racing past these checks is caught by the UNIQUE constraints on insert.
        if self.users.email_exists(&email).await? {
            warn!(email = %email, "Registration failed: email already registered");
            return Err(AuthError::EmailTaken);
        }
        if self.users.username_exists(&username).await? {
            warn!(username = %username, "Registration failed: username already taken");
            return Err(AuthError::UsernameTaken);
        }

        let user = match self.users.insert(&username, &email, &password_hash).await {
            Ok(user) => user,
            Err(e) if e.is_unique_violation() => {
                let conflict = conflict_from(&e);
                warn!(email = %email, username = %username, "Registration lost a race: {}", conflict);
                return Err(conflict);
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = user.id, email = %email, "User registered");
        self.session_for(&user)
    }

    pub async fn login(&self, credentials: Credentials) -> Result<AuthSession, AuthError> {
        let email = normalize_email(&credentials.email);
        info!(email = %email, "Login attempt");

        let user = self.users.find_by_email(&email).await?;
        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => self.dummy_hash.as_ref().clone(),
        };
        let verified = self.verify(credentials.password, stored_hash).await?;

        match user {
            Some(user) if verified => {
                info!(user_id = user.id, email = %email, "Login succeeded");
                self.session_for(&user)
            }
            Some(_) => {
                warn!(email = %email, "Login failed: password mismatch");
                Err(AuthError::InvalidCredentials)
            }
            None => {
                warn!(email = %email, "Login failed: unknown email");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub async fn whoami(&self, user_id: i64) -> Result<UserProfile, AuthError> {
        let user = self.users.find_by_id(user_id).await?.ok_or(AuthError::UnknownUser)?;
        Ok(UserProfile::from(&user))
    }

    fn session_for(&self, user: &User) -> Result<AuthSession, AuthError> {
        Ok(AuthSession {
            token: self.tokens.issue(user)?,
            token_type: "bearer".to_string(),
            expires_in: self.tokens.expires_in(),
            user: UserProfile::from(user),
        })
    }

    // Argon2 blocks; run it off the async workers.
    async fn hash(&self, password: String) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashError::Hash(e.to_string()))??;
        Ok(hashed)
    }

    async fn verify(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| HashError::Hash(e.to_string()))?;
        Ok(verified)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn conflict_from(err: &DatabaseError) -> AuthError {
    if err.to_string().contains("users.username") {
        AuthError::UsernameTaken
    } else {
        AuthError::EmailTaken
    }
}
