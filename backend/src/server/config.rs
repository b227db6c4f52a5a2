//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Everything [`create_server`](super::create_server) needs to start
/// listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Serve `store` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<dyn UserStore>) -> Self {
        Self { bind_addr, store }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
