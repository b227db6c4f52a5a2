//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the user record model and the operations that read and
//! mutate the stored collection. Adapters live in `inbound` (HTTP) and
//! `outbound` (persistence); this module never performs I/O directly.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId / TRACE_ID_HEADER: per-request correlation identifier.
//! - User, UserDraft, UserId and their sections (Account, Card, Feature,
//!   News).
//! - UserCollection: ordered in-memory record operations.
//! - UserDirectoryService: store-backed implementation of the user ports.

pub mod error;
pub mod ports;
mod trace_id;
mod user;
mod user_collection;
mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Account, Card, Feature, News, User, UserDraft, UserId};
pub use self::user_collection::UserCollection;
pub use self::user_directory::{USER_NOT_FOUND, UserDirectoryService};
