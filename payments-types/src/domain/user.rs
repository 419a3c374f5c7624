//! User domain model.

use serde::{Deserialize, Serialize};

/// The owner of a payment, keyed by email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Exact, case-sensitive email match.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}
