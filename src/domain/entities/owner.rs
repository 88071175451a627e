//! Owner domain entity
//!
//! A gym owner. Belongs to a country and holds pokemon via a join table.

use serde::{Deserialize, Serialize};

use super::country::CountryId;

/// Unique identifier for an owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub i32);

impl From<i32> for OwnerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An owner record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: CountryId,
}

/// Data required to create an owner; the country link comes from the request
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: CountryId,
}
