//! Server construction and wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::warn;

use backend::inbound::http::error::{invalid_path, json_config};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::configure_api;
use backend::outbound::persistence::{
    DieselArticlesRepository, DieselCommentsRepository, DieselTopicsRepository,
    DieselUsersRepository,
};

/// Wire the port implementations: Diesel adapters over the pool when one
/// is configured, otherwise the seeded in-memory fixture store.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState {
            topics: Arc::new(DieselTopicsRepository::new(pool.clone())),
            articles: Arc::new(DieselArticlesRepository::new(pool.clone())),
            comments: Arc::new(DieselCommentsRepository::new(pool.clone())),
            users: Arc::new(DieselUsersRepository::new(pool.clone())),
        },
        None => {
            warn!("no database configured; serving the in-memory fixture store");
            HttpState::seeded_fixture()
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .configure(configure_api)
        .service(live)
        .service(ready)
        .default_service(web::route().to(invalid_path))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
