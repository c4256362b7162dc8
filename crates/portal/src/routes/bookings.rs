use actix_web::{web, HttpRequest, Responder};
use api_models::bookings::BookingRequest;
use portal_env::logger::{instrument, Flow};

use super::AppState;
use crate::{
    core::bookings,
    services::{self, authentication::ApiKeyAuth},
};

#[instrument(skip_all, fields(flow = ?Flow::BookingsCheck))]
pub async fn bookings_check(
    state: web::Data<AppState>,
    req: HttpRequest,
    json_payload: web::Json<BookingRequest>,
) -> impl Responder {
    let flow = Flow::BookingsCheck;
    Box::pin(services::server_wrap(
        flow,
        state,
        &req,
        json_payload.into_inner(),
        bookings::booking_check_core,
        &ApiKeyAuth,
    ))
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::BookingsCreate))]
pub async fn bookings_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    json_payload: web::Json<BookingRequest>,
) -> impl Responder {
    let flow = Flow::BookingsCreate;
    Box::pin(services::server_wrap(
        flow,
        state,
        &req,
        json_payload.into_inner(),
        bookings::booking_create_core,
        &ApiKeyAuth,
    ))
    .await
}
