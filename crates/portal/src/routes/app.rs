use std::sync::Arc;

use actix_web::{web, Scope};

use super::{bookings, health, payments, webhooks};
use crate::{
    configs::settings,
    connector::{FinixClient, FinixGateway},
    db::{MockDb, StorageInterface},
};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub conf: Arc<settings::Settings>,
    pub store: Box<dyn StorageInterface>,
    pub gateway: Arc<dyn FinixGateway>,
}

impl AppState {
    pub fn new(conf: settings::Settings) -> Self {
        let gateway = Arc::new(FinixClient::new(&conf.finix));
        Self {
            conf: Arc::new(conf),
            store: Box::new(MockDb::new()),
            gateway,
        }
    }

    /// Wire up explicit storage and gateway implementations.
    pub fn with_collaborators(
        conf: settings::Settings,
        store: Box<dyn StorageInterface>,
        gateway: Arc<dyn FinixGateway>,
    ) -> Self {
        Self {
            conf: Arc::new(conf),
            store,
            gateway,
        }
    }
}

pub struct Health;

impl Health {
    pub fn server(state: AppState) -> Scope {
        web::scope("health")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::get().to(health::health)))
    }
}

pub struct Payments;

impl Payments {
    pub fn server(state: AppState) -> Scope {
        web::scope("payments")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::post().to(payments::payments_create)))
            .service(
                web::resource("/{attempt_id}").route(web::get().to(payments::payments_retrieve)),
            )
    }
}

pub struct Bookings;

impl Bookings {
    pub fn server(state: AppState) -> Scope {
        web::scope("bookings")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::post().to(bookings::bookings_create)))
            .service(web::resource("/check").route(web::post().to(bookings::bookings_check)))
    }
}

pub struct Webhooks;

impl Webhooks {
    pub fn server(state: AppState) -> Scope {
        web::scope("webhooks")
            .app_data(web::Data::new(state))
            .service(
                web::resource("/finix").route(web::post().to(webhooks::receive_incoming_webhook)),
            )
    }
}
