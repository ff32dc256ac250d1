//! Postal addresses nested under a contact.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AddressService;
