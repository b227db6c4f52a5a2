//! Driven port for the persistence store holding every user record.
//!
//! The store deals in whole documents: `load` returns the full ordered
//! collection and `save` overwrites it. Record-level operations are applied
//! in memory by the directory service between the two calls.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::define_port_error;
use crate::domain::User;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    pub enum UserStoreError {
        /// The backing document could not be read.
        Read { message: String } => "user store read failed: {message}",
        /// The backing document exists but does not hold a user collection.
        Malformed { message: String } => "user store document is malformed: {message}",
        /// The backing document could not be replaced.
        Write { message: String } => "user store write failed: {message}",
    }
}

/// Whole-collection persistence for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every stored record in insertion order.
    ///
    /// Implementations that start without a backing document materialise an
    /// empty one and return an empty collection.
    async fn load(&self) -> Result<Vec<User>, UserStoreError>;

    /// Replace the stored collection with `users`.
    async fn save(&self, users: &[User]) -> Result<(), UserStoreError>;
}

/// Store keeping records in process memory.
///
/// Used by tests and whenever the server should not touch the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create a store pre-populated with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.lock().await.clone())
    }

    async fn save(&self, users: &[User]) -> Result<(), UserStoreError> {
        *self.users.lock().await = users.to_vec();
        Ok(())
    }
}
