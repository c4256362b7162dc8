use common_utils::errors::CustomResult;
use error_stack::report;

use super::MockDb;
use crate::{core::errors::StorageError, types::storage::ApiKey};

#[async_trait::async_trait]
pub trait ApiKeyInterface {
    async fn insert_api_key(&self, api_key: ApiKey) -> CustomResult<ApiKey, StorageError>;

    async fn find_api_key_by_key(&self, key: &str) -> CustomResult<ApiKey, StorageError>;
}

#[async_trait::async_trait]
impl ApiKeyInterface for MockDb {
    async fn insert_api_key(&self, api_key: ApiKey) -> CustomResult<ApiKey, StorageError> {
        let mut api_keys = self.api_keys.lock().await;
        if api_keys.iter().any(|k| k.key == api_key.key) {
            return Err(report!(StorageError::DuplicateValue { entity: "api_key" }));
        }
        api_keys.push(api_key.clone());
        Ok(api_key)
    }

    async fn find_api_key_by_key(&self, key: &str) -> CustomResult<ApiKey, StorageError> {
        self.api_keys
            .lock()
            .await
            .iter()
            .find(|k| k.key == key)
            .cloned()
            .ok_or_else(|| report!(StorageError::ValueNotFound("api key".to_string())))
    }
}
