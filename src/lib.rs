//! Formula API Library
//!
//! This library provides the driver CRUD service: domain types, repository
//! contracts, the SQLite-backed unit of work and the HTTP adapters.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
