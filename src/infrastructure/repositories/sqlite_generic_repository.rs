use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::DataResult;
use crate::domain::repositories::GenericRepository;
use crate::infrastructure::persistence::{DriversDbContext, Entity};

/// SQLite implementation of GenericRepository
///
/// Shares its persistence context with the other repositories of the same
/// unit of work, so everything it stages is committed together.
pub struct SqliteGenericRepository<E> {
    context: Arc<Mutex<DriversDbContext>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqliteGenericRepository<E> {
    /// Creates a new SqliteGenericRepository
    ///
    /// # Arguments
    /// * `context` - persistence context owned by the unit of work
    pub fn new(context: Arc<Mutex<DriversDbContext>>) -> Self {
        Self {
            context,
            _entity: PhantomData,
        }
    }

    pub(crate) fn context(&self) -> &Arc<Mutex<DriversDbContext>> {
        &self.context
    }
}

#[async_trait]
impl<E: Entity> GenericRepository<E> for SqliteGenericRepository<E> {
    async fn all(&self) -> DataResult<Vec<E>> {
        self.context.lock().await.query_all::<E>().await
    }

    async fn get_by_id(&self, id: i64) -> DataResult<Option<E>> {
        self.context.lock().await.find::<E>(id).await
    }

    async fn add(&self, entity: E) {
        self.context.lock().await.add(entity);
    }

    async fn update(&self, entity: E) {
        self.context.lock().await.update(entity);
    }

    async fn delete(&self, entity: E) {
        self.context.lock().await.remove(entity);
    }
}
