mod collection_tests;
mod supply_tests;

use crate::service::CompassService;
use crate::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> CompassService<InMemoryStorage> {
    create_test_service_with_expiry(3600)
}

pub fn create_test_service_with_expiry(expiry_secs: u64) -> CompassService<InMemoryStorage> {
    CompassService::new(
        InMemoryStorage::new(),
        "test-secret".to_string(),
        expiry_secs,
    )
}
