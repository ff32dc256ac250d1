use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::Violations;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(Violations),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("hashing error: {0}")]
    Hash(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} is not found", entity)) }

    /// Missing, empty or unknown session token.
    pub fn unauthorized() -> Self { Self::Unauthorized("Unauthorized".into()) }

    /// Same text for unknown username and wrong password.
    pub fn bad_credentials() -> Self { Self::Unauthorized("Username or password wrong".into()) }

    pub fn conflict(msg: impl Into<String>) -> Self { Self::Conflict(msg.into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized(_) => 1004,
            ServiceError::Hash(_) => 1101,
            ServiceError::Db(_) => 1200,
        }
    }

    /// Failures the caller cannot fix by changing the request.
    pub fn is_internal(&self) -> bool {
        matches!(self, ServiceError::Db(_) | ServiceError::Hash(_))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

impl From<Violations> for ServiceError {
    fn from(v: Violations) -> Self { ServiceError::Validation(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_kind() {
        let all = [
            ServiceError::Validation(Violations::single("f", "m")),
            ServiceError::conflict("c"),
            ServiceError::not_found("contact"),
            ServiceError::unauthorized(),
            ServiceError::Hash("h".into()),
            ServiceError::Db("d".into()),
        ];
        let mut codes: Vec<u16> = all.iter().map(ServiceError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("address").to_string(), "address is not found");
    }

    #[test]
    fn only_store_and_hash_failures_are_internal() {
        assert!(ServiceError::Db("x".into()).is_internal());
        assert!(ServiceError::Hash("x".into()).is_internal());
        assert!(!ServiceError::bad_credentials().is_internal());
        assert!(!ServiceError::not_found("contact").is_internal());
    }
}
