use actix_web::{App, HttpServer};
use portal::{
    configs::settings::Settings,
    core::errors::ApplicationError,
    routes::{app, AppState},
};
use portal_env::logger;

#[actix_web::main]
async fn main() -> Result<(), ApplicationError> {
    let conf = Settings::new()?;
    conf.validate()?;

    let _guard = logger::setup(
        &conf.log,
        portal_env::service_name!(),
        vec![portal_env::service_name!(), "actix_web"],
    );

    logger::info!(
        host = conf.server.host,
        port = conf.server.port,
        "starting portal server"
    );

    let state = AppState::new(conf.clone());
    HttpServer::new(move || {
        App::new()
            .service(app::Health::server(state.clone()))
            .service(app::Payments::server(state.clone()))
            .service(app::Bookings::server(state.clone()))
            .service(app::Webhooks::server(state.clone()))
    })
    .bind((conf.server.host.as_str(), conf.server.port))?
    .workers(conf.server.workers)
    .run()
    .await?;

    Ok(())
}
