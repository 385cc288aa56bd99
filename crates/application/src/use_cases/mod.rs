pub mod check_batch;
pub mod check_domain;

pub use check_batch::CheckBatchUseCase;
pub use check_domain::CheckDomainUseCase;
