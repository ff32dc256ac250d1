//! Contacts owned by a user: CRUD plus filtered, paginated search.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ContactService;
