// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_driver_repository;
pub mod sqlite_generic_repository;

pub use sqlite_driver_repository::SqliteDriverRepository;
pub use sqlite_generic_repository::SqliteGenericRepository;
