use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Connection, Sqlite, SqliteConnection, SqlitePool};

use crate::domain::errors::{DataError, DataResult};
use crate::infrastructure::persistence::entity::{
    delete_sql, insert_sql, select_all_sql, select_by_id_sql, select_first_where_sql, update_sql,
    Entity,
};

/// A write waiting for the next `save_changes`
enum EntityState<E> {
    Added(E),
    Modified(E),
    Deleted(E),
}

#[async_trait]
trait StagedChange: Send + Sync {
    async fn apply(&self, conn: &mut SqliteConnection) -> DataResult<()>;
}

#[async_trait]
impl<E: Entity> StagedChange for EntityState<E> {
    async fn apply(&self, conn: &mut SqliteConnection) -> DataResult<()> {
        match self {
            EntityState::Added(entity) => {
                let sql = insert_sql::<E>();
                entity.bind_columns(sqlx::query(&sql)).execute(conn).await?;
            }
            EntityState::Modified(entity) => {
                let sql = update_sql::<E>();
                let result = entity
                    .bind_columns(sqlx::query(&sql))
                    .bind(entity.id())
                    .execute(conn)
                    .await?;
                ensure_row_affected::<E>(result.rows_affected(), entity.id())?;
            }
            EntityState::Deleted(entity) => {
                let sql = delete_sql::<E>();
                let result = sqlx::query(&sql).bind(entity.id()).execute(conn).await?;
                ensure_row_affected::<E>(result.rows_affected(), entity.id())?;
            }
        }

        Ok(())
    }
}

/// Updates and deletes target a row that was read earlier; if it is gone the
/// whole batch is rejected.
fn ensure_row_affected<E: Entity>(rows_affected: u64, id: i64) -> DataResult<()> {
    if rows_affected == 0 {
        return Err(DataError::StaleEntity {
            table: E::TABLE,
            id,
        });
    }

    Ok(())
}

/// Persistence context for the drivers database
///
/// Holds one pooled connection for its whole lifetime; dropping the context
/// hands the connection back to the pool. Reads go straight to the store,
/// writes are tracked until `save_changes` applies them in one transaction.
pub struct DriversDbContext {
    connection: PoolConnection<Sqlite>,
    changes: Vec<Box<dyn StagedChange>>,
}

impl DriversDbContext {
    /// Acquires a connection from `pool`
    pub async fn open(pool: &SqlitePool) -> DataResult<Self> {
        let connection = pool.acquire().await?;

        Ok(Self {
            connection,
            changes: Vec::new(),
        })
    }

    pub async fn query_all<E: Entity>(&mut self) -> DataResult<Vec<E>> {
        let sql = select_all_sql::<E>();
        let rows = sqlx::query(&sql).fetch_all(&mut *self.connection).await?;

        rows.iter()
            .map(E::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DataError::from)
    }

    pub async fn find<E: Entity>(&mut self, id: i64) -> DataResult<Option<E>> {
        let sql = select_by_id_sql::<E>();
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *self.connection)
            .await?;

        row.as_ref().map(E::from_row).transpose().map_err(DataError::from)
    }

    /// First entity, ordered by ID, whose integer `column` equals `value`
    pub async fn find_first_by<E: Entity>(
        &mut self,
        column: &str,
        value: i64,
    ) -> DataResult<Option<E>> {
        let sql = select_first_where_sql::<E>(column);
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&mut *self.connection)
            .await?;

        row.as_ref().map(E::from_row).transpose().map_err(DataError::from)
    }

    pub fn add<E: Entity>(&mut self, entity: E) {
        tracing::debug!(table = E::TABLE, "Staged insert");
        self.changes.push(Box::new(EntityState::Added(entity)));
    }

    pub fn update<E: Entity>(&mut self, entity: E) {
        tracing::debug!(table = E::TABLE, id = entity.id(), "Staged update");
        self.changes.push(Box::new(EntityState::Modified(entity)));
    }

    pub fn remove<E: Entity>(&mut self, entity: E) {
        tracing::debug!(table = E::TABLE, id = entity.id(), "Staged delete");
        self.changes.push(Box::new(EntityState::Deleted(entity)));
    }

    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    /// Writes every staged change inside a single transaction.
    ///
    /// The tracker is emptied whether or not the write succeeds. On error the
    /// transaction is rolled back and nothing staged reaches the store. An
    /// update or delete whose row no longer exists fails with
    /// `DataError::StaleEntity`.
    pub async fn save_changes(&mut self) -> DataResult<usize> {
        let changes = std::mem::take(&mut self.changes);
        if changes.is_empty() {
            return Ok(0);
        }

        let mut tx = self.connection.begin().await?;
        for change in &changes {
            change.apply(&mut *tx).await?;
        }
        tx.commit().await?;

        Ok(changes.len())
    }
}
