use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use crate::errors::ServiceError;
use crate::user::domain::{NewUser, UserChanges, UserRecord};
use crate::user::repository::UserRepository;
use models::users;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, ServiceError> {
        let res = users::find_by_username(&self.db, username).await?;
        Ok(res.map(UserRecord::from))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<UserRecord>, ServiceError> {
        let res = users::find_by_token(&self.db, token).await?;
        Ok(res.map(UserRecord::from))
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, ServiceError> {
        let now = Utc::now().into();
        let am = users::ActiveModel {
            username: Set(user.username),
            password: Set(user.password_hash),
            name: Set(user.name),
            token: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        match am.insert(&self.db).await {
            Ok(created) => Ok(created.into()),
            // lost a race against a concurrent registration
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ServiceError::conflict("Username already exists"))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, username: &str, changes: UserChanges) -> Result<UserRecord, ServiceError> {
        let mut am: users::ActiveModel = users::find_by_username(&self.db, username)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?
            .into();
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(hash) = changes.password_hash {
            am.password = Set(hash);
        }
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn set_token(&self, username: &str, token: Option<String>) -> Result<(), ServiceError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        let res = users::Entity::update_many()
            .col_expr(users::Column::Token, Expr::value(token))
            .col_expr(users::Column::UpdatedAt, Expr::value(now))
            .filter(users::Column::Username.eq(username))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("user"));
        }
        Ok(())
    }
}
