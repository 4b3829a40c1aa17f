// Infrastructure layer module
// Contains database adapters
// Follows Hexagonal Architecture

pub mod database;
pub mod persistence;
pub mod repositories;
pub mod sqlite_unit_of_work;

pub use sqlite_unit_of_work::SqliteUnitOfWork;
