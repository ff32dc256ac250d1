use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{addresses, users};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owner
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Addresses,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(users::Entity).from(Column::Username).to(users::Column::Username).into(),
            Relation::Addresses => Entity::has_many(addresses::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<addresses::Entity> for Entity {
    fn to() -> RelationDef { Relation::Addresses.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Ownership check: the contact only counts as found when it belongs to `username`.
pub async fn find_owned<C: ConnectionTrait>(db: &C, username: &str, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::Id.eq(id))
        .filter(Column::Username.eq(username))
        .one(db)
        .await
}
