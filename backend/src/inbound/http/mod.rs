//! HTTP inbound adapter exposing the user REST endpoints, documentation and
//! health probes.

pub mod docs;
pub mod error;
pub mod headers;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
