//! User module: three-layer architecture (domain, repository, service).
//!
//! Registration, login/logout, profile read/update and token authentication.

pub mod domain;
pub mod credentials;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::UserService;
