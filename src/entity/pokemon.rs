//! SeaORM model for the `pokemon` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Pokemon, PokemonId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::owners::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_owners::Relation::Owner.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_owners::Relation::Pokemon.def().rev())
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_categories::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_categories::Relation::Pokemon.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Pokemon {
    fn from(m: Model) -> Self {
        Pokemon {
            id: PokemonId(m.id),
            name: m.name,
            birth_date: m.birth_date,
        }
    }
}
