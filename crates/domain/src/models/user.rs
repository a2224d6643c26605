//! User domain models.
//!
//! Users are provided to the scheduling core as identity + role + group.
//! Credentials never leave the persistence and auth layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Role of a user within the university group system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    /// Student group leader.
    Starosta,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Starosta => "starosta",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "starosta" => Ok(UserRole::Starosta),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub telegram_alias: Option<String>,
    pub course: i32,
    pub group_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Public profile returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telegram_alias: Option<String>,
    pub course: i32,
    pub group_name: String,
    pub role: UserRole,
    pub is_admin: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            telegram_alias: user.telegram_alias,
            course: user.course,
            group_name: user.group_name,
            is_admin: user.role.is_admin(),
            role: user.role,
        }
    }
}

/// Request payload for changing a user's role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AssignRoleRequest {
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    role.parse::<UserRole>().map(|_| ()).map_err(|_| {
        let mut err = validator::ValidationError::new("invalid_role");
        err.message = Some("Role must be 'student', 'starosta' or 'admin'".into());
        err
    })
}

/// Row in the admin user listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminUserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub group_name: String,
    pub role: UserRole,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            group_name: user.group_name,
            is_admin: user.role.is_admin(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Response for the admin user listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<AdminUserSummary>,
}
