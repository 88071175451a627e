//! Reviewer domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewerId(pub i32);

impl From<i32> for ReviewerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reviewer record; reviews hang off it one-to-many
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: ReviewerId,
    pub first_name: String,
    pub last_name: String,
}

/// Data required to create a reviewer
#[derive(Debug, Clone)]
pub struct NewReviewer {
    pub first_name: String,
    pub last_name: String,
}
