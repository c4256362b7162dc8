use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{
    core::errors::StorageError,
    types::storage::{PaymentInstrument, PaymentInstrumentUpdate},
};

#[async_trait::async_trait]
pub trait PaymentInstrumentInterface {
    async fn insert_payment_instrument(
        &self,
        instrument: PaymentInstrument,
    ) -> CustomResult<PaymentInstrument, StorageError>;

    async fn find_payment_instrument_by_instrument_id(
        &self,
        instrument_id: &str,
    ) -> CustomResult<PaymentInstrument, StorageError>;

    async fn update_payment_instrument(
        &self,
        instrument_id: &str,
        instrument_update: PaymentInstrumentUpdate,
    ) -> CustomResult<PaymentInstrument, StorageError>;
}

#[async_trait::async_trait]
impl PaymentInstrumentInterface for MockDb {
    async fn insert_payment_instrument(
        &self,
        instrument: PaymentInstrument,
    ) -> CustomResult<PaymentInstrument, StorageError> {
        let mut instruments = self.payment_instruments.lock().await;
        if instruments
            .iter()
            .any(|i| i.instrument_id == instrument.instrument_id)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "payment_instrument"
            }));
        }
        instruments.push(instrument.clone());
        Ok(instrument)
    }

    async fn find_payment_instrument_by_instrument_id(
        &self,
        instrument_id: &str,
    ) -> CustomResult<PaymentInstrument, StorageError> {
        self.payment_instruments
            .lock()
            .await
            .iter()
            .find(|i| i.instrument_id == instrument_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "payment instrument {instrument_id}"
                )))
            })
    }

    async fn update_payment_instrument(
        &self,
        instrument_id: &str,
        instrument_update: PaymentInstrumentUpdate,
    ) -> CustomResult<PaymentInstrument, StorageError> {
        let mut instruments = self.payment_instruments.lock().await;
        let instrument = instruments
            .iter_mut()
            .find(|i| i.instrument_id == instrument_id)
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "payment instrument {instrument_id}"
                )))
            })?;
        *instrument = instrument_update.apply_changeset(instrument.clone());
        Ok(instrument.clone())
    }
}
