//! User account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    Moderator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub registration_date: DateTime<Utc>,
    /// Issued once at registration. Not checked by any endpoint.
    pub api_key: String,
}

/// Request to register a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl CreateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }

    /// Canonical form used for storage and uniqueness checks.
    pub fn normalized(self) -> Self {
        Self {
            username: normalize_username(&self.username),
            email: normalize_email(&self.email),
            role: self.role,
        }
    }
}

/// Partial update of a user. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(ref username) = self.username {
            validate_username(username)?;
        }
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    /// Canonical form used for storage and uniqueness checks.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.as_deref().map(normalize_username),
            email: self.email.as_deref().map(normalize_email),
            role: self.role,
        }
    }

    /// Merge the provided fields into `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}

/// Usernames are stored without surrounding whitespace.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}

/// Emails are trimmed and their domain lowercased. The local part keeps its
/// case.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn validate_username(username: &str) -> AppResult<()> {
    if username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> AppResult<()> {
    let valid = email
        .trim()
        .rsplit_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(())
}
