use thiserror::Error;

/// Errors raised by the data access layer
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stale entity: no row in {table} with id {id}")]
    StaleEntity { table: &'static str, id: i64 },
}

pub type DataResult<T> = Result<T, DataError>;
