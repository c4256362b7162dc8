use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{
    core::errors::StorageError,
    types::storage::{PaymentAttempt, PaymentAttemptNew, PaymentAttemptUpdate},
};

#[async_trait::async_trait]
pub trait PaymentAttemptInterface {
    /// Insert an attempt, enforcing system-wide uniqueness of the
    /// idempotency key. The uniqueness scan and the insert run under one
    /// table lock; a duplicate key surfaces as [`StorageError::DuplicateValue`].
    async fn insert_payment_attempt(
        &self,
        attempt: PaymentAttemptNew,
    ) -> CustomResult<PaymentAttempt, StorageError>;

    async fn find_payment_attempt_by_attempt_id(
        &self,
        attempt_id: &str,
    ) -> CustomResult<PaymentAttempt, StorageError>;

    async fn find_payment_attempt_by_idempotency_key(
        &self,
        idempotency_key: &str,
    ) -> CustomResult<Option<PaymentAttempt>, StorageError>;

    async fn update_payment_attempt(
        &self,
        attempt_id: &str,
        attempt_update: PaymentAttemptUpdate,
    ) -> CustomResult<PaymentAttempt, StorageError>;
}

#[async_trait::async_trait]
impl PaymentAttemptInterface for MockDb {
    async fn insert_payment_attempt(
        &self,
        attempt: PaymentAttemptNew,
    ) -> CustomResult<PaymentAttempt, StorageError> {
        let mut attempts = self.payment_attempts.lock().await;
        if attempts.iter().any(|a| {
            a.attempt_id == attempt.attempt_id || a.idempotency_key == attempt.idempotency_key
        }) {
            return Err(report!(StorageError::DuplicateValue {
                entity: "payment_attempt"
            }));
        }
        let now = common_utils::date_time::now();
        let stored = PaymentAttempt {
            attempt_id: attempt.attempt_id,
            merchant_id: attempt.merchant_id,
            user_id: attempt.user_id,
            target_kind: attempt.target_kind,
            record_id: attempt.record_id,
            instrument_id: attempt.instrument_id,
            base_amount: attempt.base_amount,
            fee_amount: attempt.fee_amount,
            total_amount: attempt.total_amount,
            status: attempt.status,
            gateway_transfer_id: None,
            idempotency_key: attempt.idempotency_key,
            failure_code: None,
            failure_message: None,
            created_at: now,
            modified_at: now,
        };
        attempts.push(stored.clone());
        Ok(stored)
    }

    async fn find_payment_attempt_by_attempt_id(
        &self,
        attempt_id: &str,
    ) -> CustomResult<PaymentAttempt, StorageError> {
        self.payment_attempts
            .lock()
            .await
            .iter()
            .find(|a| a.attempt_id == attempt_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "payment attempt {attempt_id}"
                )))
            })
    }

    async fn find_payment_attempt_by_idempotency_key(
        &self,
        idempotency_key: &str,
    ) -> CustomResult<Option<PaymentAttempt>, StorageError> {
        Ok(self
            .payment_attempts
            .lock()
            .await
            .iter()
            .find(|a| a.idempotency_key == idempotency_key)
            .cloned())
    }

    async fn update_payment_attempt(
        &self,
        attempt_id: &str,
        attempt_update: PaymentAttemptUpdate,
    ) -> CustomResult<PaymentAttempt, StorageError> {
        let mut attempts = self.payment_attempts.lock().await;
        let attempt = attempts
            .iter_mut()
            .find(|a| a.attempt_id == attempt_id)
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "payment attempt {attempt_id}"
                )))
            })?;
        *attempt = attempt_update.apply_changeset(attempt.clone());
        Ok(attempt.clone())
    }
}
