//! Shared helpers for handler tests.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

use crate::inbound::http::configure_api;
use crate::inbound::http::error::{invalid_path, json_config};
use crate::inbound::http::state::HttpState;

/// Full application over the given state: the real routing table, JSON
/// config and unmatched-route fallback, exactly as the server wires them.
pub(crate) fn test_app_with(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(configure_api)
        .default_service(web::route().to(invalid_path))
}

/// Full application over the seeded fixture store.
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(HttpState::seeded_fixture())
}
