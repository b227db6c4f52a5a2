//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::RequestTrace;
use crate::inbound::http::headers::{api_headers, preflight_or_not_found};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{docs, users};

/// Assemble the application: user routes, documentation, health probes,
/// the preflight/404 fallback and the shared middleware.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockbank::domain::ports::InMemoryUserStore;
/// use mockbank::inbound::http::health::HealthState;
/// use mockbank::inbound::http::state::HttpState;
/// use mockbank::server::build_app;
///
/// let state = HttpState::from_store(Arc::new(InMemoryUserStore::default()));
/// let _app = build_app(web::Data::new(HealthState::new()), web::Data::new(state));
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
        .app_data(health_state)
        .app_data(http_state)
        .wrap(api_headers())
        .wrap(RequestTrace)
        .configure(users::configure)
        .configure(docs::configure)
        .service(ready)
        .service(live)
        .default_service(web::to(preflight_or_not_found))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The returned server must be awaited to drive the listener. Readiness is
/// flagged once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, store } = config;
    // One state for every worker, so all of them share the write lock.
    let http_state = web::Data::new(HttpState::from_store(store));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "server listening");
    Ok(server)
}
