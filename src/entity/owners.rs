//! SeaORM model for the `owners` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{CountryId, Owner, OwnerId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id"
    )]
    Country,
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_owners::Relation::Pokemon.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_owners::Relation::Owner.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Owner {
    fn from(m: Model) -> Self {
        Owner {
            id: OwnerId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            gym: m.gym,
            country_id: CountryId(m.country_id),
        }
    }
}
