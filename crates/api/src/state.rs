use std::sync::Arc;
use zonecheck_application::{CheckBatchUseCase, CheckDomainUseCase};
use zonecheck_domain::Config;

#[derive(Clone)]
pub struct AppState {
    pub check_domain: Arc<CheckDomainUseCase>,
    pub check_batch: Arc<CheckBatchUseCase>,
    pub config: Arc<Config>,
}
