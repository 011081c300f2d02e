use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("name is required")]
    EmptyName,

    #[error("email is required")]
    EmptyEmail,

    #[error("email address is not valid")]
    InvalidEmail,
}

/// Role tag chosen at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Faculty,
    Student,
}

impl UserRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Faculty => "faculty",
            UserRole::Student => "student",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Faculty => "Faculty",
            UserRole::Student => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active user. This is the only record persisted across runs.
///
/// Serializes as the stored identity record:
/// `{id, name, email, role, department?, course?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_faculty(&self) -> bool {
        self.role == UserRole::Faculty
    }
}

/// Login form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub course: Option<String>,
}

impl UserDraft {
    /// Validate the draft and mint a user with a fresh id.
    ///
    /// Blank optional fields become `None`. `course` only applies to students.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the name or email is missing or the email has no
    /// `local@domain` shape.
    pub fn into_user(self, id: UserId) -> Result<User, UserError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        if !looks_like_email(&email) {
            return Err(UserError::InvalidEmail);
        }

        let course = match self.role {
            UserRole::Student => normalize_optional(self.course),
            UserRole::Faculty => None,
        };

        Ok(User {
            id,
            name,
            email,
            role: self.role,
            department: normalize_optional(self.department),
            course,
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
