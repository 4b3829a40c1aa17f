// Persistence context and entity mappings

pub mod context;
pub mod entity;
mod mappings;

pub use context::DriversDbContext;
pub use entity::Entity;
