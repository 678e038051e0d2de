// User domain module
// Contains the user record, role enum, and email value object

pub mod value_objects;

pub use value_objects::Email;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee account in the induction portal
///
/// Serialized field names match the persisted blob format
/// (`camelCase`, roles as `"ADMIN"` / `"USER"`). The password is stored and
/// compared in plaintext; the portal has no credential hashing or lockout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    pub join_date: NaiveDate,
    /// Induction completion, 0-100
    pub progress: u8,
}

impl User {
    /// Case-insensitive email comparison used for credential lookup
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Access level of a portal account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::User => write!(f, "USER"),
        }
    }
}

/// Partial input for creating a user; missing fields receive store defaults
#[derive(Debug, Default, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
}
