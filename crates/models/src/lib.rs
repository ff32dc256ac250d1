//! sea-orm entities for the contact book store.
//!
//! `users` 1—n `contacts` 1—n `addresses`; both foreign keys cascade on delete.

pub mod db;
pub mod users;
pub mod contacts;
pub mod addresses;

#[cfg(test)]
mod tests;
