use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{core::errors::StorageError, types::storage::FeeSchedule};

#[async_trait::async_trait]
pub trait FeeScheduleInterface {
    async fn insert_fee_schedule(
        &self,
        fee_schedule: FeeSchedule,
    ) -> CustomResult<FeeSchedule, StorageError>;

    async fn find_fee_schedule_by_schedule_id(
        &self,
        schedule_id: &str,
    ) -> CustomResult<FeeSchedule, StorageError>;
}

#[async_trait::async_trait]
impl FeeScheduleInterface for MockDb {
    async fn insert_fee_schedule(
        &self,
        fee_schedule: FeeSchedule,
    ) -> CustomResult<FeeSchedule, StorageError> {
        let mut schedules = self.fee_schedules.lock().await;
        if schedules
            .iter()
            .any(|s| s.schedule_id == fee_schedule.schedule_id)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "fee_schedule"
            }));
        }
        schedules.push(fee_schedule.clone());
        Ok(fee_schedule)
    }

    async fn find_fee_schedule_by_schedule_id(
        &self,
        schedule_id: &str,
    ) -> CustomResult<FeeSchedule, StorageError> {
        self.fee_schedules
            .lock()
            .await
            .iter()
            .find(|s| s.schedule_id == schedule_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "fee schedule {schedule_id}"
                )))
            })
    }
}
