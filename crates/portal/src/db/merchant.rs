use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{
    core::errors::StorageError,
    types::storage::{Merchant, MerchantUpdate},
};

#[async_trait::async_trait]
pub trait MerchantInterface {
    async fn insert_merchant(&self, merchant: Merchant)
        -> CustomResult<Merchant, StorageError>;

    async fn find_merchant_by_merchant_id(
        &self,
        merchant_id: &str,
    ) -> CustomResult<Merchant, StorageError>;

    async fn find_merchant_by_gateway_merchant_id(
        &self,
        gateway_merchant_id: &str,
    ) -> CustomResult<Merchant, StorageError>;

    async fn update_merchant(
        &self,
        merchant_id: &str,
        merchant_update: MerchantUpdate,
    ) -> CustomResult<Merchant, StorageError>;
}

#[async_trait::async_trait]
impl MerchantInterface for MockDb {
    async fn insert_merchant(
        &self,
        merchant: Merchant,
    ) -> CustomResult<Merchant, StorageError> {
        let mut merchants = self.merchants.lock().await;
        if merchants
            .iter()
            .any(|m| m.merchant_id == merchant.merchant_id)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "merchant"
            }));
        }
        merchants.push(merchant.clone());
        Ok(merchant)
    }

    async fn find_merchant_by_merchant_id(
        &self,
        merchant_id: &str,
    ) -> CustomResult<Merchant, StorageError> {
        self.merchants
            .lock()
            .await
            .iter()
            .find(|m| m.merchant_id == merchant_id)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "merchant {merchant_id}"
                )))
            })
    }

    async fn find_merchant_by_gateway_merchant_id(
        &self,
        gateway_merchant_id: &str,
    ) -> CustomResult<Merchant, StorageError> {
        self.merchants
            .lock()
            .await
            .iter()
            .find(|m| m.gateway_merchant_id.as_deref() == Some(gateway_merchant_id))
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "merchant with gateway id {gateway_merchant_id}"
                )))
            })
    }

    async fn update_merchant(
        &self,
        merchant_id: &str,
        merchant_update: MerchantUpdate,
    ) -> CustomResult<Merchant, StorageError> {
        let mut merchants = self.merchants.lock().await;
        let merchant = merchants
            .iter_mut()
            .find(|m| m.merchant_id == merchant_id)
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "merchant {merchant_id}"
                )))
            })?;
        *merchant = merchant_update.apply_changeset(merchant.clone());
        Ok(merchant.clone())
    }
}
