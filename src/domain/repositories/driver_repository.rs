use async_trait::async_trait;

use crate::domain::driver::Driver;
use crate::domain::errors::DataResult;
use crate::domain::repositories::generic_repository::GenericRepository;

/// Repository trait for drivers
#[async_trait]
pub trait DriverRepository: GenericRepository<Driver> {
    /// Find the first driver (lowest ID) carrying the given racing number
    ///
    /// Racing numbers are not unique, so several drivers may match.
    async fn get_by_driver_number(&self, driver_number: i32) -> DataResult<Option<Driver>>;
}
