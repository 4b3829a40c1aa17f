// Repository contracts (ports)
// Implemented by the infrastructure layer

pub mod driver_repository;
pub mod generic_repository;
pub mod unit_of_work;

pub use driver_repository::DriverRepository;
pub use generic_repository::GenericRepository;
pub use unit_of_work::UnitOfWork;
