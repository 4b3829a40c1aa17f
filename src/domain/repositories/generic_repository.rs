use async_trait::async_trait;

use crate::domain::errors::DataResult;

/// Repository trait shared by every persisted entity
///
/// Reads hit the store immediately. Writes are only staged on the owning
/// persistence context and reach the store when the unit of work completes.
#[async_trait]
pub trait GenericRepository<E>: Send + Sync
where
    E: Send + 'static,
{
    /// Load every entity, re-querying the store on each call
    async fn all(&self) -> DataResult<Vec<E>>;

    /// Find an entity by its ID
    async fn get_by_id(&self, id: i64) -> DataResult<Option<E>>;

    /// Stage an insert; the store assigns the ID on commit
    async fn add(&self, entity: E);

    /// Stage an update of an entity that was fetched first
    async fn update(&self, entity: E);

    /// Stage removal of an entity
    async fn delete(&self, entity: E);
}
