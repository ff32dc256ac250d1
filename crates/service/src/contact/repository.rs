use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::domain::{Contact, ContactData, ContactFilter};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use models::{addresses, contacts};

/// Contact persistence. Every lookup is keyed by owner and id together.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, owner: &str, data: ContactData) -> Result<Contact, ServiceError>;
    async fn find_owned(&self, owner: &str, id: i32) -> Result<Option<Contact>, ServiceError>;
    /// Replaces every field; `None` when the contact is not the owner's.
    async fn update(&self, owner: &str, id: i32, data: ContactData) -> Result<Option<Contact>, ServiceError>;
    /// Removes the contact together with its addresses; `false` when not found.
    async fn delete(&self, owner: &str, id: i32) -> Result<bool, ServiceError>;
    /// One page ordered by id, plus the total number of matches.
    async fn search(&self, owner: &str, filter: &ContactFilter, page: Pagination) -> Result<(Vec<Contact>, u64), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

/// Escapes LIKE wildcards so user input only ever matches literally.
fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", like_escape(s))).escape('\\')
}

/// Folds the needle the same way the backend's `LOWER()` folds the column.
fn fold_case(backend: DbBackend, s: &str) -> String {
    match backend {
        // SQLite only folds ASCII letters
        DbBackend::Sqlite => s.to_ascii_lowercase(),
        _ => s.to_lowercase(),
    }
}

fn filter_condition(backend: DbBackend, owner: &str, filter: &ContactFilter) -> Condition {
    let mut cond = Condition::all().add(contacts::Column::Username.eq(owner));
    if let Some(name) = &filter.name {
        let name = fold_case(backend, name);
        cond = cond.add(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(contacts::Column::FirstName))).like(like_contains(&name)))
                .add(Expr::expr(Func::lower(Expr::col(contacts::Column::LastName))).like(like_contains(&name))),
        );
    }
    if let Some(email) = &filter.email {
        cond = cond.add(Expr::col(contacts::Column::Email).like(like_contains(email)));
    }
    if let Some(phone) = &filter.phone {
        cond = cond.add(Expr::col(contacts::Column::Phone).like(like_contains(phone)));
    }
    cond
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn create(&self, owner: &str, data: ContactData) -> Result<Contact, ServiceError> {
        let now = Utc::now().into();
        let am = contacts::ActiveModel {
            id: NotSet,
            username: Set(owner.to_string()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn find_owned(&self, owner: &str, id: i32) -> Result<Option<Contact>, ServiceError> {
        Ok(contacts::find_owned(&self.db, owner, id).await?.map(Contact::from))
    }

    async fn update(&self, owner: &str, id: i32, data: ContactData) -> Result<Option<Contact>, ServiceError> {
        let Some(existing) = contacts::find_owned(&self.db, owner, id).await? else {
            return Ok(None);
        };
        let mut am: contacts::ActiveModel = existing.into();
        am.first_name = Set(data.first_name);
        am.last_name = Set(data.last_name);
        am.email = Set(data.email);
        am.phone = Set(data.phone);
        am.updated_at = Set(Utc::now().into());
        Ok(Some(am.update(&self.db).await?.into()))
    }

    async fn delete(&self, owner: &str, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        if contacts::find_owned(&txn, owner, id).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }
        addresses::Entity::delete_many()
            .filter(addresses::Column::ContactId.eq(id))
            .exec(&txn)
            .await?;
        contacts::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    async fn search(&self, owner: &str, filter: &ContactFilter, page: Pagination) -> Result<(Vec<Contact>, u64), ServiceError> {
        let (idx, size) = page.normalize();
        let paginator = contacts::Entity::find()
            .filter(filter_condition(self.db.get_database_backend(), owner, filter))
            .order_by_asc(contacts::Column::Id)
            .paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(idx).await?;
        Ok((rows.into_iter().map(Contact::from).collect(), total))
    }
}
