//! Domain ports for the hexagonal boundary.
//!
//! - Driven: [`UserStore`], implemented by outbound persistence adapters.
//! - Driving: [`UsersQuery`] and [`UsersCommand`], consumed by inbound
//!   adapters and implemented by the user directory service.

mod macros;
mod user_store;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{InMemoryUserStore, UserStore, UserStoreError};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;

use macros::define_port_error;
