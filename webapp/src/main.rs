//! User admin entry-point: loads settings, wires the users backend client,
//! and serves the pages.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use webapp::inbound::http::health::HealthState;
use webapp::outbound::users_api::HttpUserDirectory;
use webapp::settings::WebAppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WebAppSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let backend_url = settings.backend_url()?;
    let timeout = settings.request_timeout()?;
    let users = HttpUserDirectory::new(backend_url, timeout)
        .wrap_err("failed to build users backend client")?;
    info!(
        backend_url = %users.base_url(),
        timeout_secs = timeout.as_secs(),
        "users backend configured"
    );

    let config = ServerConfig::new(settings.bind_addr()?, Arc::new(users))
        .with_redirect_after_save(settings.redirect_after_save()?);
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    server.await.wrap_err("page server terminated abnormally")?;
    health_state.mark_unhealthy();
    Ok(())
}
