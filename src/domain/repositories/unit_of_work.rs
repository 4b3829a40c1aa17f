use async_trait::async_trait;

use crate::domain::errors::DataResult;
use crate::domain::repositories::driver_repository::DriverRepository;

/// Groups the repositories of one request behind a single commit point
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn drivers(&self) -> &dyn DriverRepository;

    /// Flush every staged change in one transaction.
    ///
    /// Returns the number of changes written.
    async fn complete(&self) -> DataResult<usize>;
}
