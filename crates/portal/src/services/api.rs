use actix_web::{HttpRequest, HttpResponse, ResponseError};
use error_stack::Report;
use portal_env::logger;
use serde::Serialize;

use crate::{
    core::errors::{ApiErrorResponse, RouterResponse},
    routes::AppState,
    services::authentication::AuthenticateAndFetch,
};

/// What a request flow hands back to the HTTP layer.
#[derive(Debug, Eq, PartialEq)]
pub enum ApplicationResponse<R> {
    Json(R),
    StatusOk,
    TextPlain(String),
}

/// Run one request flow: log the request boundaries, authenticate, execute,
/// and turn the outcome into an `HttpResponse`. Every route handler funnels
/// through here.
pub async fn server_wrap<T, U, Q, F, Fut>(
    flow: logger::Flow,
    state: actix_web::web::Data<AppState>,
    req: &HttpRequest,
    payload: T,
    func: F,
    api_auth: &dyn AuthenticateAndFetch<U>,
) -> HttpResponse
where
    F: FnOnce(AppState, U, T) -> Fut,
    Fut: std::future::Future<Output = RouterResponse<Q>>,
    Q: Serialize + std::fmt::Debug,
{
    let request_id = common_utils::generate_id_with_default_len("req");
    logger::info!(
        tag = ?logger::Tag::BeginRequest,
        flow = ?flow,
        request_id,
        "begin request"
    );

    let auth_out = match api_auth
        .authenticate_and_fetch(req.headers(), &state)
        .await
    {
        Ok(auth_out) => auth_out,
        Err(err) => return log_and_return_error_response(err),
    };

    let response = match func(state.get_ref().clone(), auth_out, payload).await {
        Ok(ApplicationResponse::Json(body)) => http_response_json(&body),
        Ok(ApplicationResponse::StatusOk) => http_response_ok(),
        Ok(ApplicationResponse::TextPlain(text)) => http_response_plaintext(text),
        Err(err) => log_and_return_error_response(err),
    };

    logger::info!(
        tag = ?logger::Tag::EndRequest,
        flow = ?flow,
        request_id,
        status_code = response.status().as_u16(),
        "end request"
    );
    response
}

pub fn http_response_json<R: Serialize>(response: &R) -> HttpResponse {
    match serde_json::to_string(response) {
        Ok(body) => HttpResponse::Ok()
            .content_type(mime::APPLICATION_JSON)
            .body(body),
        Err(err) => {
            logger::error!(?err, "failed to serialize response body");
            ApiErrorResponse::InternalServerError.error_response()
        }
    }
}

pub fn http_response_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn http_response_plaintext(text: String) -> HttpResponse {
    HttpResponse::Ok().content_type(mime::TEXT_PLAIN).body(text)
}

pub fn log_and_return_error_response(error: Report<ApiErrorResponse>) -> HttpResponse {
    logger::error!(?error);
    error.current_context().error_response()
}
