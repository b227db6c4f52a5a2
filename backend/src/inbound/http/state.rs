//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserDirectoryService;
use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Serve both ports from one [`UserDirectoryService`] over `store`.
    ///
    /// Sharing the service is what serialises writes across workers, so
    /// build this once and clone the result into each worker.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockbank::domain::ports::InMemoryUserStore;
    /// use mockbank::inbound::http::state::HttpState;
    ///
    /// let _state = HttpState::from_store(Arc::new(InMemoryUserStore::default()));
    /// ```
    pub fn from_store(store: Arc<dyn UserStore>) -> Self {
        let directory = Arc::new(UserDirectoryService::new(store));
        Self::new(directory.clone(), directory)
    }
}
