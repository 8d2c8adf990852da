use std::{cell::RefCell, rc::Rc};

use actix_web::{
    web::{self, Data},
    App, HttpServer,
};
use booking::registry::BookingRegistry;
use booking_ext::gateways::StatsdGateway;
use common::subject_observer::Subject;
use log::{info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::config::app::AppConfig;

mod api;
mod config;
mod error;

pub use error::AppError;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    config::log::init();

    let app_config = AppConfig::new()?;
    info!(
        "Starting booking service on {}:{}",
        app_config.service_host, app_config.service_port
    );

    let bind_address = (app_config.service_host.clone(), app_config.service_port);
    // A single worker owns the registry, so subscribers are registered and
    // notified from one thread of control.
    HttpServer::new(move || {
        let mut registry = BookingRegistry::default();
        match StatsdGateway::new((app_config.statsd_host.clone(), app_config.statsd_port)) {
            Ok(gateway) => registry.register_observer(Rc::new(gateway)),
            Err(err) => warn!("Statsd gateway disabled: {err}"),
        }

        App::new()
            .app_data(Data::new(RefCell::new(registry)))
            .service(web::scope("/v1").configure(api::v1::configure()))
            .service(
                RapiDoc::with_openapi("/api-docs/openapi.json", api::ApiDoc::openapi())
                    .path("/rapidoc"),
            )
    })
    .workers(1)
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
