use crate::db::connect_memory;
use crate::{addresses, contacts, users};
use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, ColumnTrait, Set};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_user(db: &DatabaseConnection, username: &str, token: Option<&str>) -> Result<users::Model> {
    let now = Utc::now().into();
    let am = users::ActiveModel {
        username: Set(username.to_string()),
        password: Set("not-a-real-hash".to_string()),
        name: Set(format!("{username} name")),
        token: Set(token.map(str::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

async fn insert_contact(db: &DatabaseConnection, username: &str, first_name: &str) -> Result<contacts::Model> {
    let now = Utc::now().into();
    let am = contacts::ActiveModel {
        username: Set(username.to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(None),
        email: Set(Some(format!("{first_name}@mail.com"))),
        phone: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_address(db: &DatabaseConnection, contact_id: i32) -> Result<addresses::Model> {
    let now = Utc::now().into();
    let am = addresses::ActiveModel {
        contact_id: Set(contact_id),
        street: Set(Some("street test".into())),
        city: Set(Some("city test".into())),
        province: Set(None),
        country: Set("country test".into()),
        postal_code: Set("12345".into()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn test_user_lookup_by_username_and_token() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "test", Some("tok-1")).await?;

    let by_name = users::find_by_username(&db, "test").await?;
    assert_eq!(by_name.map(|u| u.name), Some("test name".to_string()));

    let by_token = users::find_by_token(&db, "tok-1").await?;
    assert_eq!(by_token.map(|u| u.username), Some("test".to_string()));

    assert!(users::find_by_token(&db, "tok-2").await?.is_none());
    assert!(users::find_by_username(&db, "nobody").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_username_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "test", None).await?;
    assert!(insert_user(&db, "test", None).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_token_is_unique_but_null_is_shared() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "alice", None).await?;
    insert_user(&db, "bob", None).await?;
    insert_user(&db, "carol", Some("same")).await?;
    assert!(insert_user(&db, "dave", Some("same")).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_find_owned_scopes_by_username() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "alice", None).await?;
    insert_user(&db, "bob", None).await?;
    let c = insert_contact(&db, "alice", "friend").await?;

    assert!(contacts::find_owned(&db, "alice", c.id).await?.is_some());
    assert!(contacts::find_owned(&db, "bob", c.id).await?.is_none());
    assert!(contacts::find_owned(&db, "alice", c.id + 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_find_in_contact_scopes_by_contact() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "alice", None).await?;
    let first = insert_contact(&db, "alice", "first").await?;
    let second = insert_contact(&db, "alice", "second").await?;
    let addr = insert_address(&db, first.id).await?;

    assert!(addresses::find_in_contact(&db, first.id, addr.id).await?.is_some());
    assert!(addresses::find_in_contact(&db, second.id, addr.id).await?.is_none());

    let related = first.find_related(addresses::Entity).all(&db).await?;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].postal_code, "12345");
    Ok(())
}

#[tokio::test]
async fn test_deleting_contact_cascades_to_addresses() -> Result<()> {
    let db = setup_test_db().await?;
    insert_user(&db, "alice", None).await?;
    let c = insert_contact(&db, "alice", "friend").await?;
    insert_address(&db, c.id).await?;
    insert_address(&db, c.id).await?;

    contacts::Entity::delete_by_id(c.id).exec(&db).await?;

    let left = addresses::Entity::find()
        .filter(addresses::Column::ContactId.eq(c.id))
        .count(&db)
        .await?;
    assert_eq!(left, 0);
    Ok(())
}
