use actix_web::{HttpResponse, Responder};
use portal_env::logger::{self, instrument};

#[instrument(skip_all)]
pub async fn health() -> impl Responder {
    logger::info!("health was called");
    HttpResponse::Ok().body("health is good")
}
