use argon2::{Algorithm, Argon2, Params, Version};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::user::domain::NewUser;
use crate::user::repo::seaorm::SeaOrmUserRepository;
use crate::user::repository::UserRepository;

/// Fresh in-memory store with the schema applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Minimal-cost argon2 so tests don't spend seconds hashing.
pub fn fast_argon2() -> Argon2<'static> {
    let params = Params::new(8, 1, 1, None).expect("valid argon2 params");
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

/// Insert a user row directly; contacts need an existing owner.
pub async fn seed_user(db: &DatabaseConnection, username: &str) -> Result<(), anyhow::Error> {
    let repo = SeaOrmUserRepository { db: db.clone() };
    repo.create(NewUser { username: username.into(), name: format!("{username} user"), password_hash: "x".into() })
        .await?;
    Ok(())
}
