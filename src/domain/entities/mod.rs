//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM models in the `entity` module.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

pub use category::{Category, CategoryId, NewCategory};
pub use country::{Country, CountryId, NewCountry};
pub use owner::{NewOwner, Owner, OwnerId};
pub use pokemon::{NewPokemon, Pokemon, PokemonId};
pub use review::{NewReview, Review, ReviewId};
pub use reviewer::{NewReviewer, Reviewer, ReviewerId};
