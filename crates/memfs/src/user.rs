//! Users that create filesystem entries.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The identity recorded as the creator of every entry.
///
/// Users compare by username, so two values built from the same name are
/// interchangeable for ownership checks. Cloning shares the name buffer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    username: Arc<str>,
}

impl User {
    pub fn new(username: impl Into<Arc<str>>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
