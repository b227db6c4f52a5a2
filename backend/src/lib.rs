//! Mock banking user API: a CRUD HTTP server over a JSON document.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: record model, ports and the user directory service.
//! - [`inbound`]: Actix handlers translating HTTP into port calls.
//! - [`outbound`]: the JSON file store implementing the persistence port.
//! - [`server`]: application assembly and listener startup.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by the docs page and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestTrace;
