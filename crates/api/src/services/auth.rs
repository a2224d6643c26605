//! Account registration and password login.

use domain::models::user::UserProfile;
use domain::models::User;
use persistence::repositories::{GroupRepository, NewUser, UserRepository};
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{check_password_policy, hash_password, verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::JwtAuthConfig;

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    #[error("Unknown student group '{0}'")]
    UnknownGroup(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Account details supplied at sign-up, with the password still in clear.
#[derive(Debug, Clone)]
pub struct Signup<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub telegram_alias: Option<&'a str>,
    pub course: i32,
    pub group_name: &'a str,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub expires_in: i64,
    pub profile: UserProfile,
}

/// Issues tokens and manages credentials.
pub struct AuthService {
    users: UserRepository,
    groups: GroupRepository,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            groups: GroupRepository::new(pool),
            jwt_config,
        }
    }

    /// Creates a `student` account. Emails are stored lowercased.
    pub async fn register(&self, signup: Signup<'_>) -> Result<User, AuthError> {
        check_password_policy(signup.password)
            .map_err(|e| AuthError::WeakPassword(e.to_string()))?;

        if !self.groups.exists(signup.group_name).await? {
            return Err(AuthError::UnknownGroup(signup.group_name.to_string()));
        }

        let email = signup.email.trim().to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = hash_password(signup.password)?;
        let created = self
            .users
            .create(NewUser {
                first_name: signup.first_name.trim(),
                last_name: signup.last_name.trim(),
                email: &email,
                password_hash: &password_hash,
                telegram_alias: signup.telegram_alias,
                course: signup.course,
                group_name: signup.group_name,
            })
            .await;

        // Two concurrent sign-ups can both pass the lookup above.
        let entity = match created {
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                return Err(AuthError::EmailAlreadyExists)
            }
            other => other?,
        };

        let user: User = entity.into();
        info!(user_id = %user.id, group = %user.group_name, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let entity = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let user: User = entity.into();
        let token = self.jwt_config.issue_access_token(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            access_token: token.token,
            expires_in: token.expires_in,
            profile: user.into(),
        })
    }
}

/// Builds the RS256 signer/verifier from configured PEM keys.
pub fn build_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, AuthError> {
    JwtConfig::new(
        &normalize_pem_key(&config.private_key),
        &normalize_pem_key(&config.public_key),
        config.access_token_expiry_secs,
        config.leeway_secs,
    )
    .map_err(|e| AuthError::Internal(format!("Failed to initialize JWT: {}", e)))
}

/// Keys passed through environment variables often carry literal `\n`
/// sequences and surrounding quotes.
fn normalize_pem_key(key: &str) -> String {
    key.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .replace("\\n", "\n")
}
