//! Driving port for mutating user records.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Write-side use cases.
///
/// Implementations must serialise mutations so that concurrent requests do
/// not lose each other's writes.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new record, assigning the next identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace the body of record `id`, keeping its identifier.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn replace_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove record `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
