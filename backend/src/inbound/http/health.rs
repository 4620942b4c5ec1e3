//! Liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{get, http::header, web, HttpResponse};

/// Shared probe state. Readiness flips on once the server has bound and the
/// storage adapters are wired.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// New state, not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready to receive traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Current readiness.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Liveness probe: 200 while the process is running.
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Server is alive")),
    tags = ["health"],
    operation_id = "healthLive"
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}

/// Readiness probe: 200 once initialisation is complete, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is still starting")
    ),
    tags = ["health"],
    operation_id = "healthReady"
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::App;

    use super::*;

    #[actix_web::test]
    async fn readiness_flips_after_mark_ready() {
        let state = web::Data::new(HealthState::new());
        let app =
            actix_test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let request = actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request();
        let before = actix_test::call_service(&app, request).await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.mark_ready();
        let request = actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request();
        let after = actix_test::call_service(&app, request).await;
        assert_eq!(after.status(), StatusCode::OK);
    }
}
