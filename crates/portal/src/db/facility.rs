use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{core::errors::StorageError, types::storage::Facility};

#[async_trait::async_trait]
pub trait FacilityInterface {
    async fn insert_facility(&self, facility: Facility)
        -> CustomResult<Facility, StorageError>;

    async fn find_facility_by_facility_id(
        &self,
        facility_id: &str,
    ) -> CustomResult<Facility, StorageError>;
}

#[async_trait::async_trait]
impl FacilityInterface for MockDb {
    async fn insert_facility(
        &self,
        facility: Facility,
    ) -> CustomResult<Facility, StorageError> {
        let mut facilities = self.facilities.lock().await;
        if facilities
            .iter()
            .any(|f| f.facility_id == facility.facility_id)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "facility"
            }));
        }
        facilities.push(facility.clone());
        Ok(facility)
    }

    async fn find_facility_by_facility_id(
        &self,
        facility_id: &str,
    ) -> CustomResult<Facility, StorageError> {
        self.facilities
            .lock()
            .await
            .iter()
            .find(|f| f.facility_id == facility_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "facility {facility_id}"
                )))
            })
    }
}
