//! Backend entry-point: loads settings, opens the data file and serves the
//! user API, OpenAPI docs and health probes.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mockbank::domain::ports::UserStore;
use mockbank::inbound::http::health::HealthState;
use mockbank::outbound::persistence::JsonFileUserStore;
use mockbank::server::{ServerConfig, create_server};
use mockbank::settings::ServerSettings;

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let host: IpAddr = settings.host().parse().map_err(|e| {
        std::io::Error::other(format!("invalid host '{}': {e}", settings.host()))
    })?;
    let bind_addr = SocketAddr::new(host, settings.port());

    let data_file = settings.data_file();
    let store = JsonFileUserStore::open(&data_file).map_err(std::io::Error::other)?;
    // Materialise the document up front so a corrupt file fails startup.
    let users = store
        .load()
        .await
        .map_err(|e| std::io::Error::other(format!("failed to load users: {e}")))?;
    info!(path = %store.path(), users = users.len(), "user document loaded");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, Arc::new(store)))?;
    info!(docs = %format!("http://{bind_addr}/docs"), "API documentation available");
    server.await
}
