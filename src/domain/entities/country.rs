//! Country domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryId(pub i32);

impl From<i32> for CountryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A country record; owners belong to exactly one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

/// Data required to create a country
#[derive(Debug, Clone)]
pub struct NewCountry {
    pub name: String,
}
