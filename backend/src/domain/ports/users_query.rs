//! Driving port for reading user records.
//!
//! HTTP handlers depend on this trait rather than on a store, so the read
//! path can be exercised with any implementation.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every record in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The record with identifier `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
