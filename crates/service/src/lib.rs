//! Service layer providing the contact book's business operations on top of models.
//! - Separates business logic from data access (repository traits per aggregate).
//! - Validates typed request structs before any store access.
//! - Every contact/address operation is scoped to the authenticated owner.

pub mod errors;
pub mod validation;
pub mod pagination;
pub mod user;
pub mod contact;
pub mod address;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
