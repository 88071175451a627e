//! SeaORM model for the `reviews` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{PokemonId, Review, ReviewId, ReviewerId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::PokemonId",
        to = "super::pokemon::Column::Id"
    )]
    Pokemon,
    #[sea_orm(
        belongs_to = "super::reviewers::Entity",
        from = "Column::ReviewerId",
        to = "super::reviewers::Column::Id"
    )]
    Reviewer,
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pokemon.def()
    }
}

impl Related<super::reviewers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(m: Model) -> Self {
        Review {
            id: ReviewId(m.id),
            title: m.title,
            text: m.text,
            rating: m.rating,
            pokemon_id: PokemonId(m.pokemon_id),
            reviewer_id: ReviewerId(m.reviewer_id),
        }
    }
}
