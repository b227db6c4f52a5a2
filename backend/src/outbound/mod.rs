//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: the JSON file store behind [`UserStore`].
//!
//! Adapters are thin translators between domain types and their stored
//! representation. They contain no business logic.
//!
//! [`UserStore`]: crate::domain::ports::UserStore

pub mod persistence;
