//! Pokemon domain entity
//!
//! The central aggregate: linked many-to-many to owners and categories,
//! one-to-many to reviews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a pokemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonId(pub i32);

impl From<i32> for PokemonId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pokemon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Data required to create a pokemon; owner and category links are
/// established at creation time
#[derive(Debug, Clone)]
pub struct NewPokemon {
    pub name: String,
    pub birth_date: NaiveDate,
}
