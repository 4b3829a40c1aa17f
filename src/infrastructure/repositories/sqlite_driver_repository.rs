use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::driver::Driver;
use crate::domain::errors::DataResult;
use crate::domain::repositories::{DriverRepository, GenericRepository};
use crate::infrastructure::persistence::DriversDbContext;
use crate::infrastructure::repositories::SqliteGenericRepository;

/// SQLite implementation of DriverRepository
pub struct SqliteDriverRepository {
    inner: SqliteGenericRepository<Driver>,
}

impl SqliteDriverRepository {
    pub fn new(context: Arc<Mutex<DriversDbContext>>) -> Self {
        Self {
            inner: SqliteGenericRepository::new(context),
        }
    }
}

#[async_trait]
impl GenericRepository<Driver> for SqliteDriverRepository {
    async fn all(&self) -> DataResult<Vec<Driver>> {
        self.inner.all().await
    }

    async fn get_by_id(&self, id: i64) -> DataResult<Option<Driver>> {
        self.inner.get_by_id(id).await
    }

    async fn add(&self, entity: Driver) {
        self.inner.add(entity).await
    }

    async fn update(&self, entity: Driver) {
        self.inner.update(entity).await
    }

    async fn delete(&self, entity: Driver) {
        self.inner.delete(entity).await
    }
}

#[async_trait]
impl DriverRepository for SqliteDriverRepository {
    async fn get_by_driver_number(&self, driver_number: i32) -> DataResult<Option<Driver>> {
        self.inner
            .context()
            .lock()
            .await
            .find_first_by::<Driver>("driver_number", i64::from(driver_number))
            .await
    }
}
