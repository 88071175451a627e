//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{
    CountryId, NewCategory, NewCountry, NewOwner, NewPokemon, NewReview, NewReviewer, PokemonId,
    ReviewerId,
};

pub fn test_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1996, 2, 27).unwrap()
}

pub fn test_category() -> NewCategory {
    NewCategory {
        name: "Electric".to_string(),
    }
}

pub fn test_country() -> NewCountry {
    NewCountry {
        name: "Kanto".to_string(),
    }
}

pub fn test_owner(country_id: CountryId) -> NewOwner {
    NewOwner {
        first_name: "Brock".to_string(),
        last_name: "Harrison".to_string(),
        gym: "Pewter City Gym".to_string(),
        country_id,
    }
}

pub fn test_pokemon() -> NewPokemon {
    NewPokemon {
        name: "Pikachu".to_string(),
        birth_date: test_birth_date(),
    }
}

pub fn test_reviewer() -> NewReviewer {
    NewReviewer {
        first_name: "Samuel".to_string(),
        last_name: "Oak".to_string(),
    }
}

pub fn test_review(pokemon_id: PokemonId, reviewer_id: ReviewerId) -> NewReview {
    NewReview {
        title: "Shockingly good".to_string(),
        text: "Would battle again".to_string(),
        rating: 5,
        pokemon_id,
        reviewer_id,
    }
}
