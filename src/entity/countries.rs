//! SeaORM model for the `countries` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Country, CountryId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::owners::Entity")]
    Owners,
}

impl Related<super::owners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owners.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Country {
    fn from(m: Model) -> Self {
        Country {
            id: CountryId(m.id),
            name: m.name,
        }
    }
}
