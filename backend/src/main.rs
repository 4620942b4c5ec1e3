//! Backend entry-point: settings, storage, migrations, HTTP listener.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{
    run_migrations, seed_example_data, DbPool, PoolConfig,
};
use server::{ServerConfig, ServerSettings};

fn to_io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(to_io_error)?;
    let bind_addr = settings.bind_addr().map_err(to_io_error)?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url.clone() {
        let migration_url = database_url.clone();
        tokio::task::spawn_blocking(move || run_migrations(&migration_url))
            .await
            .map_err(to_io_error)?
            .map_err(to_io_error)?;

        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(to_io_error)?;

        if settings.seed_example_data {
            seed_example_data(&pool).await.map_err(to_io_error)?;
        }
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    server::create_server(health_state, config)?.await
}
