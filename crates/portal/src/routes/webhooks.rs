use actix_web::{web, HttpRequest, Responder};
use portal_env::logger::{instrument, Flow};

use super::AppState;
use crate::{
    core::webhooks::{self, IncomingWebhookPayload},
    headers,
    services::{self, authentication::NoAuth},
};

#[instrument(skip_all, fields(flow = ?Flow::IncomingWebhookReceive))]
pub async fn receive_incoming_webhook(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let flow = Flow::IncomingWebhookReceive;
    let payload = IncomingWebhookPayload {
        body,
        signature: req
            .headers()
            .get(headers::X_FINIX_SIGNATURE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned),
    };
    Box::pin(services::server_wrap(
        flow,
        state,
        &req,
        payload,
        webhooks::incoming_webhooks_core,
        &NoAuth,
    ))
    .await
}
