use actix_web::{web, HttpRequest, Responder};
use api_models::payments::{PaymentRetrieveRequest, PaymentsRequest};
use portal_env::logger::{instrument, Flow};

use super::AppState;
use crate::{
    core::payments,
    services::{self, authentication::ApiKeyAuth},
};

#[instrument(skip_all, fields(flow = ?Flow::PaymentsCreate))]
pub async fn payments_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    json_payload: web::Json<PaymentsRequest>,
) -> impl Responder {
    let flow = Flow::PaymentsCreate;
    Box::pin(services::server_wrap(
        flow,
        state,
        &req,
        json_payload.into_inner(),
        payments::payments_create_core,
        &ApiKeyAuth,
    ))
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::PaymentsRetrieve))]
pub async fn payments_retrieve(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let flow = Flow::PaymentsRetrieve;
    let payload = PaymentRetrieveRequest {
        attempt_id: path.into_inner(),
    };
    Box::pin(services::server_wrap(
        flow,
        state,
        &req,
        payload,
        payments::payments_retrieve_core,
        &ApiKeyAuth,
    ))
    .await
}
