use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::domain::{Address, AddressData};
use crate::errors::ServiceError;
use models::addresses;

/// Address persistence, always scoped to the parent contact.
/// Contact ownership is checked by the caller before any of these run.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create(&self, contact_id: i32, data: AddressData) -> Result<Address, ServiceError>;
    async fn find(&self, contact_id: i32, id: i32) -> Result<Option<Address>, ServiceError>;
    async fn update(&self, contact_id: i32, id: i32, data: AddressData) -> Result<Option<Address>, ServiceError>;
    async fn delete(&self, contact_id: i32, id: i32) -> Result<bool, ServiceError>;
    /// Ordered by id.
    async fn list(&self, contact_id: i32) -> Result<Vec<Address>, ServiceError>;
}

pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn create(&self, contact_id: i32, data: AddressData) -> Result<Address, ServiceError> {
        let now = Utc::now().into();
        let am = addresses::ActiveModel {
            id: NotSet,
            contact_id: Set(contact_id),
            street: Set(data.street),
            city: Set(data.city),
            province: Set(data.province),
            country: Set(data.country),
            postal_code: Set(data.postal_code),
            created_at: Set(now),
            updated_at: Set(now),
        };
        match am.insert(&self.db).await {
            Ok(m) => Ok(m.into()),
            // contact removed between the ownership check and the insert
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                Err(ServiceError::not_found("contact"))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, contact_id: i32, id: i32) -> Result<Option<Address>, ServiceError> {
        Ok(addresses::find_in_contact(&self.db, contact_id, id).await?.map(Address::from))
    }

    async fn update(&self, contact_id: i32, id: i32, data: AddressData) -> Result<Option<Address>, ServiceError> {
        let Some(existing) = addresses::find_in_contact(&self.db, contact_id, id).await? else {
            return Ok(None);
        };
        let mut am: addresses::ActiveModel = existing.into();
        am.street = Set(data.street);
        am.city = Set(data.city);
        am.province = Set(data.province);
        am.country = Set(data.country);
        am.postal_code = Set(data.postal_code);
        am.updated_at = Set(Utc::now().into());
        Ok(Some(am.update(&self.db).await?.into()))
    }

    async fn delete(&self, contact_id: i32, id: i32) -> Result<bool, ServiceError> {
        match addresses::find_in_contact(&self.db, contact_id, id).await? {
            Some(m) => {
                m.delete(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self, contact_id: i32) -> Result<Vec<Address>, ServiceError> {
        let rows = addresses::Entity::find()
            .filter(addresses::Column::ContactId.eq(contact_id))
            .order_by_asc(addresses::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn data() -> AddressData {
        AddressData { street: None, city: None, province: None, country: "Indonesia".into(), postal_code: "11111".into() }
    }

    #[tokio::test]
    async fn insert_for_missing_contact_is_not_found() -> anyhow::Result<()> {
        let repo = SeaOrmAddressRepository { db: get_db().await? };
        let err = repo.create(4242, data()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
        assert_eq!(err.to_string(), "contact is not found");
        assert!(repo.list(4242).await?.is_empty());
        Ok(())
    }
}
