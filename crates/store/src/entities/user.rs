//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Credential;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub professional_card: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Credential {
    fn from(model: Model) -> Self {
        Credential {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            professional_card: model.professional_card,
            created_at: model.created_at,
        }
    }
}
