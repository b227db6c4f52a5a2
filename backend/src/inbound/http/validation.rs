//! Request parsing for the user endpoints.
//!
//! Identifiers come from the path as raw strings and bodies arrive as raw
//! bytes, so every rejection is reported with the `{"error": ...}` envelope
//! instead of Actix's default extractor responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{Error, UserDraft, UserId};

/// Message for a path segment that is not a user identifier.
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Message for a create payload without a `name` member.
pub const MISSING_NAME: &str = "Missing 'name'";

/// Parse a path segment as a [`UserId`].
///
/// # Examples
/// ```
/// use mockbank::inbound::http::validation::parse_user_id;
///
/// assert_eq!(parse_user_id("42").expect("numeric").get(), 42);
/// assert!(parse_user_id("abc").is_err());
/// ```
pub fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse()
        .map_err(|_| Error::invalid_request(INVALID_USER_ID))
}

/// Parse a create payload. The `name` member must be present.
pub fn parse_new_user(body: &[u8]) -> Result<UserDraft, Error> {
    let value: Value = serde_json::from_slice(body).map_err(body_error)?;
    if value.get("name").is_none() {
        return Err(Error::invalid_request(MISSING_NAME));
    }
    decode(value)
}

/// Parse a replacement payload. Any `id` member is ignored.
pub fn parse_replacement(body: &[u8]) -> Result<UserDraft, Error> {
    serde_json::from_slice(body).map_err(body_error)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(body_error)
}

fn body_error(err: serde_json::Error) -> Error {
    Error::invalid_request(err.to_string())
}
