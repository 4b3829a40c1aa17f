use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::errors::DataResult;
use crate::domain::repositories::{DriverRepository, UnitOfWork};
use crate::infrastructure::persistence::DriversDbContext;
use crate::infrastructure::repositories::SqliteDriverRepository;

/// SQLite implementation of UnitOfWork
///
/// Built once per request. Owns the persistence context (and through it a
/// pooled connection) until dropped; changes that were staged but never
/// completed are discarded.
pub struct SqliteUnitOfWork {
    id: Uuid,
    context: Arc<Mutex<DriversDbContext>>,
    drivers: SqliteDriverRepository,
}

impl SqliteUnitOfWork {
    /// Opens a persistence context on `pool` and wires the repositories to it
    pub async fn begin(pool: &SqlitePool) -> DataResult<Self> {
        let context = Arc::new(Mutex::new(DriversDbContext::open(pool).await?));
        let id = Uuid::new_v4();
        tracing::debug!(unit_of_work = %id, "Unit of work started");

        Ok(Self {
            id,
            drivers: SqliteDriverRepository::new(Arc::clone(&context)),
            context,
        })
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    fn drivers(&self) -> &dyn DriverRepository {
        &self.drivers
    }

    async fn complete(&self) -> DataResult<usize> {
        let result = self.context.lock().await.save_changes().await;

        match &result {
            Ok(written) => {
                tracing::info!(unit_of_work = %self.id, changes = written, "Changes committed")
            }
            Err(e) => {
                tracing::error!(unit_of_work = %self.id, error = %e, "Failed to commit changes")
            }
        }

        result
    }
}

impl Drop for SqliteUnitOfWork {
    fn drop(&mut self) {
        if let Ok(context) = self.context.try_lock() {
            let pending = context.pending_changes();
            if pending > 0 {
                tracing::warn!(
                    unit_of_work = %self.id,
                    pending,
                    "Unit of work dropped with uncommitted changes"
                );
            }
        }
    }
}
