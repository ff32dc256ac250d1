use async_trait::async_trait;

use super::domain::{NewUser, UserChanges, UserRecord};
use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, ServiceError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<UserRecord>, ServiceError>;
    /// Fails with `Conflict` when the username is taken.
    async fn create(&self, user: NewUser) -> Result<UserRecord, ServiceError>;
    /// Fails with `NotFound` when no such user exists.
    async fn update(&self, username: &str, changes: UserChanges) -> Result<UserRecord, ServiceError>;
    /// `Some` starts a session (replacing any previous one), `None` ends it.
    async fn set_token(&self, username: &str, token: Option<String>) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, UserRecord>>, // key: username
    }

    impl MockUserRepository {
        fn users(&self) -> MutexGuard<'_, HashMap<String, UserRecord>> {
            self.users.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Raw stored record, for assertions on hashes and tokens.
        pub fn stored(&self, username: &str) -> Option<UserRecord> {
            self.users().get(username).cloned()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, ServiceError> {
            Ok(self.users().get(username).cloned())
        }

        async fn find_by_token(&self, token: &str) -> Result<Option<UserRecord>, ServiceError> {
            Ok(self.users().values().find(|u| u.token.as_deref() == Some(token)).cloned())
        }

        async fn create(&self, user: NewUser) -> Result<UserRecord, ServiceError> {
            let mut users = self.users();
            if users.contains_key(&user.username) {
                return Err(ServiceError::conflict("Username already exists"));
            }
            let record = UserRecord { username: user.username, name: user.name, password_hash: user.password_hash, token: None };
            users.insert(record.username.clone(), record.clone());
            Ok(record)
        }

        async fn update(&self, username: &str, changes: UserChanges) -> Result<UserRecord, ServiceError> {
            let mut users = self.users();
            let record = users.get_mut(username).ok_or_else(|| ServiceError::not_found("user"))?;
            if let Some(name) = changes.name { record.name = name; }
            if let Some(hash) = changes.password_hash { record.password_hash = hash; }
            Ok(record.clone())
        }

        async fn set_token(&self, username: &str, token: Option<String>) -> Result<(), ServiceError> {
            let mut users = self.users();
            let record = users.get_mut(username).ok_or_else(|| ServiceError::not_found("user"))?;
            record.token = token;
            Ok(())
        }
    }
}
