//! SeaORM model for the `categories` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Category, CategoryId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_categories::Relation::Pokemon.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_categories::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: CategoryId(m.id),
            name: m.name,
        }
    }
}
