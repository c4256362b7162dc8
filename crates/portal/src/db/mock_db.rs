use std::sync::Arc;

use futures::lock::Mutex;

use crate::types::storage;

/// In-memory storage backend. Every table is a mutex-guarded `Vec`, which
/// keeps cross-row checks (idempotency lookups, booking overlap scans)
/// atomic with the insert that follows them.
#[derive(Clone, Default)]
pub struct MockDb {
    pub api_keys: Arc<Mutex<Vec<storage::ApiKey>>>,
    pub bookings: Arc<Mutex<Vec<storage::Booking>>>,
    pub domain_records: Arc<Mutex<Vec<storage::DomainRecord>>>,
    pub facilities: Arc<Mutex<Vec<storage::Facility>>>,
    pub fee_schedules: Arc<Mutex<Vec<storage::FeeSchedule>>>,
    pub merchants: Arc<Mutex<Vec<storage::Merchant>>>,
    pub payment_attempts: Arc<Mutex<Vec<storage::PaymentAttempt>>>,
    pub payment_instruments: Arc<Mutex<Vec<storage::PaymentInstrument>>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }
}
