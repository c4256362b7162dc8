use actix_web::http::header::HeaderMap;
use error_stack::{report, ResultExt};

use crate::{
    core::errors::{ApiErrorResponse, RouterResult},
    headers,
    routes::AppState,
};

/// The account a request was authenticated as.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

#[async_trait::async_trait]
pub trait AuthenticateAndFetch<T>: Sync {
    async fn authenticate_and_fetch(
        &self,
        request_headers: &HeaderMap,
        state: &AppState,
    ) -> RouterResult<T>;
}

/// Resolves the `X-Api-Key` header to a portal account.
pub struct ApiKeyAuth;

#[async_trait::async_trait]
impl AuthenticateAndFetch<AuthenticatedUser> for ApiKeyAuth {
    async fn authenticate_and_fetch(
        &self,
        request_headers: &HeaderMap,
        state: &AppState,
    ) -> RouterResult<AuthenticatedUser> {
        let api_key = request_headers
            .get(headers::X_API_KEY)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| report!(ApiErrorResponse::Unauthorized))?;

        let stored_key = state
            .store
            .find_api_key_by_key(api_key)
            .await
            .change_context(ApiErrorResponse::Unauthorized)?;

        Ok(AuthenticatedUser {
            user_id: stored_key.user_id,
        })
    }
}

/// For endpoints authenticated by other means, such as webhook signatures.
pub struct NoAuth;

#[async_trait::async_trait]
impl AuthenticateAndFetch<()> for NoAuth {
    async fn authenticate_and_fetch(
        &self,
        _request_headers: &HeaderMap,
        _state: &AppState,
    ) -> RouterResult<()> {
        Ok(())
    }
}
