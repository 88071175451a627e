//! HTTP handlers
//!
//! Axum request handlers for the API endpoints, one module per entity.
//! Request/response DTO structs and their conversions from domain entities
//! live next to the handlers that use them.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

pub use category::{
    create_category, delete_category, get_category, list_categories, list_pokemon_by_category,
    update_category,
};
pub use country::{
    create_country, delete_country, get_country, get_country_of_owner, list_countries,
    list_owners_from_country, update_country,
};
pub use owner::{
    create_owner, delete_owner, get_owner, list_owners, list_owners_of_pokemon,
    list_pokemon_by_owner, update_owner,
};
pub use pokemon::{
    create_pokemon, delete_pokemon, get_pokemon, get_pokemon_rating, list_pokemon, update_pokemon,
};
pub use review::{
    create_review, delete_review, get_review, list_reviews, list_reviews_of_pokemon, update_review,
};
pub use reviewer::{
    create_reviewer, delete_reviewer, get_reviewer, list_reviewers, list_reviews_by_reviewer,
    update_reviewer,
};

/// Case-insensitive, whitespace-trimmed comparison used for duplicate
/// detection on natural key fields
pub(crate) fn same_natural_key(a: &str, b: &str) -> bool {
    a.trim().to_uppercase() == b.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::same_natural_key;

    #[test]
    fn natural_key_ignores_case_and_whitespace() {
        assert!(same_natural_key("Pikachu", "  pikachu "));
        assert!(same_natural_key("PIKACHU", "pikachu"));
        assert!(!same_natural_key("Pikachu", "Raichu"));
    }
}
