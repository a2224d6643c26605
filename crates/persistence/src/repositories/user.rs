//! User repository for database operations.

use domain::models::UserRole;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::{UserEntity, UserRoleDb};
use crate::metrics::QueryTimer;

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, telegram_alias, course, group_name, role, created_at";

/// Fields for a new account. Passwords arrive already hashed.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub telegram_alias: Option<&'a str>,
    pub course: i32,
    pub group_name: &'a str,
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a user with the default `student` role.
    ///
    /// A duplicate email surfaces as a unique violation on `users_email_key`.
    pub async fn create(&self, user: NewUser<'_>) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, telegram_alias, course, group_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.telegram_alias)
        .bind(user.course)
        .bind(user.group_name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Emails are matched case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Lists all users, newest first.
    pub async fn list_all(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Sets a user's role. Returns `None` if the user does not exist.
    pub async fn set_role(
        &self,
        id: Uuid,
        role: UserRole,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_user_role");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "UPDATE users SET role = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(UserRoleDb::from(role))
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Promotes the user with this email to admin. Idempotent.
    pub async fn promote_to_admin_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("promote_user_to_admin");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "UPDATE users SET role = 'admin' WHERE LOWER(email) = LOWER($1) RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Locks the user row for the rest of the transaction.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("lock_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await;
        timer.record();
        result
    }

    pub async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_user");
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map(|r| r.rows_affected());
        timer.record();
        result
    }
}
