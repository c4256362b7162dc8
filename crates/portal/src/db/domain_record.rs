use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{
    core::errors::StorageError,
    types::storage::{DomainRecord, DomainRecordUpdate},
};

#[async_trait::async_trait]
pub trait DomainRecordInterface {
    async fn insert_domain_record(
        &self,
        record: DomainRecord,
    ) -> CustomResult<DomainRecord, StorageError>;

    async fn find_domain_record_by_record_id(
        &self,
        record_id: &str,
    ) -> CustomResult<DomainRecord, StorageError>;

    async fn update_domain_record(
        &self,
        record_id: &str,
        record_update: DomainRecordUpdate,
    ) -> CustomResult<DomainRecord, StorageError>;
}

#[async_trait::async_trait]
impl DomainRecordInterface for MockDb {
    async fn insert_domain_record(
        &self,
        record: DomainRecord,
    ) -> CustomResult<DomainRecord, StorageError> {
        let mut records = self.domain_records.lock().await;
        if records.iter().any(|r| r.record_id == record.record_id) {
            return Err(report!(StorageError::DuplicateValue {
                entity: "domain_record"
            }));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn find_domain_record_by_record_id(
        &self,
        record_id: &str,
    ) -> CustomResult<DomainRecord, StorageError> {
        self.domain_records
            .lock()
            .await
            .iter()
            .find(|r| r.record_id == record_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!("record {record_id}")))
            })
    }

    async fn update_domain_record(
        &self,
        record_id: &str,
        record_update: DomainRecordUpdate,
    ) -> CustomResult<DomainRecord, StorageError> {
        let mut records = self.domain_records.lock().await;
        let record = records
            .iter_mut()
            .find(|r| r.record_id == record_id)
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!("record {record_id}")))
            })?;
        *record = record_update.apply_changeset(record.clone());
        Ok(record.clone())
    }
}
