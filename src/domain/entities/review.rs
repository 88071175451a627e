//! Review domain entity
//!
//! Always references exactly one pokemon and one reviewer; both are
//! resolved before a review is persisted.

use serde::{Deserialize, Serialize};

use super::pokemon::PokemonId;
use super::reviewer::ReviewerId;

/// Unique identifier for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub i32);

impl From<i32> for ReviewId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: PokemonId,
    pub reviewer_id: ReviewerId,
}

/// Data required to create a review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: PokemonId,
    pub reviewer_id: ReviewerId,
}
