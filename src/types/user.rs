//! Directory user types

use serde::{Deserialize, Serialize};

/// A user as resolved through the platform's contact directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Tenant-scoped user ID (the identifier used in configuration)
    pub user_id: String,
    /// Display name
    pub name: String,
    /// English display name (optional)
    pub en_name: Option<String>,
    /// Email address (optional)
    pub email: Option<String>,
}

impl DirectoryUser {
    /// Create a new directory user
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        DirectoryUser {
            user_id: user_id.into(),
            name: name.into(),
            en_name: None,
            email: None,
        }
    }

    /// Set the English display name
    pub fn with_en_name(mut self, en_name: impl Into<String>) -> Self {
        self.en_name = Some(en_name.into());
        self
    }

    /// Set email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
