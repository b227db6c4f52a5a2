//! Ordered, in-memory view of every stored user.
//!
//! The directory service loads a collection, applies exactly one of the
//! operations below and hands the result back to the store. Keeping these
//! operations free of I/O lets every store implementation share them.

use crate::domain::{Error, User, UserDraft, UserId};

/// Users in insertion order.
///
/// ## Invariants
/// - Identifiers are unique as long as records only enter through
///   [`UserCollection::insert`]. A hand-edited document may violate this;
///   lookups then act on the first match and removals drop every match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    /// Wrap records loaded from a store.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    /// Consume the collection, returning its records.
    pub fn into_vec(self) -> Vec<User> {
        self.users
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Record with the given identifier.
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Identifier the next insert will receive: one past the current
    /// maximum, or [`UserId::FIRST`] when empty.
    ///
    /// Recomputed from the records every time, so deleting the newest user
    /// makes its identifier available again.
    pub fn next_id(&self) -> Option<UserId> {
        match self.users.iter().map(User::id).max() {
            Some(highest) => highest.successor(),
            None => Some(UserId::FIRST),
        }
    }

    /// Append a new record built from `draft` and return it.
    ///
    /// # Errors
    /// Returns an internal error when the identifier space is exhausted.
    pub fn insert(&mut self, draft: UserDraft) -> Result<User, Error> {
        let id = self
            .next_id()
            .ok_or_else(|| Error::internal("user identifier space exhausted"))?;
        let user = User::from_draft(id, draft);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Replace the body of the record with identifier `id`, keeping its
    /// position and identifier. Returns the stored record, or `None` when no
    /// record matches.
    pub fn replace(&mut self, id: UserId, draft: UserDraft) -> Option<User> {
        let slot = self.users.iter_mut().find(|user| user.id() == id)?;
        *slot = User::from_draft(id, draft);
        Some(slot.clone())
    }

    /// Remove the record with identifier `id`. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id() != id);
        self.users.len() < before
    }
}
