//! Promotes the configured bootstrap account to admin on startup.
//!
//! Idempotent. A missing account is only logged so the service can start
//! before the admin has registered.

use persistence::repositories::UserRepository;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminConfig;

pub async fn bootstrap_admin(pool: &PgPool, config: &AdminConfig) -> Result<(), sqlx::Error> {
    let Some(email) = config
        .bootstrap_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
    else {
        return Ok(());
    };

    match UserRepository::new(pool.clone())
        .promote_to_admin_by_email(email)
        .await?
    {
        Some(user) => info!(user_id = %user.id, email = %email, "Bootstrap admin ensured"),
        None => warn!(
            email = %email,
            "Bootstrap admin email configured but no such user is registered yet"
        ),
    }

    Ok(())
}
