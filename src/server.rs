use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use log::info;
use strum::IntoEnumIterator;

use crate::{config::Config, error::RoutingError, time_service::TimeService, zone::Zone};

/// Registers `GET /<zone>` for every supported zone, plus the JSON fallbacks for
/// unknown paths and unsupported methods.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for zone in Zone::iter() {
        cfg.service(
            web::resource(zone.path())
                .app_data(web::Data::new(zone))
                .route(web::get().to(get_time))
                .default_service(web::route().to(method_not_allowed)),
        );
    }
    cfg.default_service(web::route().to(not_found));
}

async fn get_time(service: web::Data<TimeService>, zone: web::Data<Zone>) -> HttpResponse {
    HttpResponse::Ok().json(service.get_time(**zone))
}

async fn method_not_allowed() -> Result<HttpResponse, RoutingError> {
    Err(RoutingError::MethodNotAllowed)
}

async fn not_found() -> Result<HttpResponse, RoutingError> {
    Err(RoutingError::NotFound)
}

pub async fn run(config: &Config, service: TimeService) -> anyhow::Result<()> {
    info!(
        "Time API {} listening on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port
    );
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .configure(configure)
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;
    Ok(())
}
