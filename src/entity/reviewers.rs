//! SeaORM model for the `reviewers` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Reviewer, ReviewerId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviewers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
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

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reviewer {
    fn from(m: Model) -> Self {
        Reviewer {
            id: ReviewerId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
        }
    }
}
