//! User directory service: the read and write use cases over a
//! [`UserStore`].
//!
//! Every mutation runs a full load → modify → save cycle. Cycles are
//! serialised through one async mutex owned by the service, so the service
//! must be shared (behind an `Arc`) by every worker that writes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::domain::ports::{UserStore, UserStoreError, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserCollection, UserDraft, UserId};

/// Message returned when an identifier does not match any record.
pub const USER_NOT_FOUND: &str = "User not found";

/// Store-backed implementation of [`UsersQuery`] and [`UsersCommand`].
pub struct UserDirectoryService {
    store: Arc<dyn UserStore>,
    write_lock: Mutex<()>,
}

impl UserDirectoryService {
    /// Build the service over `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<UserCollection, Error> {
        self.store
            .load()
            .await
            .map(UserCollection::new)
            .map_err(store_failure)
    }

    /// Apply `operation` to a freshly loaded collection and persist the
    /// result. Nothing is written when `operation` fails.
    async fn mutate<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&mut UserCollection) -> Result<T, Error> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;
        let outcome = operation(&mut users)?;
        self.store
            .save(users.as_slice())
            .await
            .map_err(store_failure)?;
        Ok(outcome)
    }
}

fn store_failure(err: UserStoreError) -> Error {
    let mapped = Error::internal(err.to_string());
    error!(
        error = %err,
        trace_id = mapped.trace_id().unwrap_or("-"),
        "user store operation failed"
    );
    mapped
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.load().await.map(UserCollection::into_vec)
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        let users = self.load().await?;
        users.find(id).cloned().ok_or_else(user_not_found)
    }
}

#[async_trait]
impl UsersCommand for UserDirectoryService {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let created = self.mutate(|users| users.insert(draft)).await?;
        debug!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn replace_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let replaced = self
            .mutate(|users| users.replace(id, draft).ok_or_else(user_not_found))
            .await?;
        debug!(user_id = %id, "user replaced");
        Ok(replaced)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.mutate(|users| {
            if users.remove(id) {
                Ok(())
            } else {
                Err(user_not_found())
            }
        })
        .await?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
