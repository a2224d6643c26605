//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::UserRole;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for user_role that maps to PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRoleDb {
    Student,
    Starosta,
    Admin,
}

impl From<UserRoleDb> for UserRole {
    fn from(db_role: UserRoleDb) -> Self {
        match db_role {
            UserRoleDb::Student => UserRole::Student,
            UserRoleDb::Starosta => UserRole::Starosta,
            UserRoleDb::Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for UserRoleDb {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Student => UserRoleDb::Student,
            UserRole::Starosta => UserRoleDb::Starosta,
            UserRole::Admin => UserRoleDb::Admin,
        }
    }
}

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub telegram_alias: Option<String>,
    pub course: i32,
    pub group_name: String,
    pub role: UserRoleDb,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            telegram_alias: entity.telegram_alias,
            course: entity.course,
            group_name: entity.group_name,
            role: entity.role.into(),
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion_roundtrip() {
        for role in [UserRole::Student, UserRole::Starosta, UserRole::Admin] {
            let db: UserRoleDb = role.into();
            assert_eq!(UserRole::from(db), role);
        }
    }
}
