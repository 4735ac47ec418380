//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::AbhaUser;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub abha_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for AbhaUser {
    fn from(model: Model) -> Self {
        AbhaUser {
            abha_id: model.abha_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            dob: model.dob,
            gender: model.gender,
            address: model.address,
            created_at: model.created_at,
        }
    }
}
