//! Stored document shape. Internal to the persistence layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::User;

/// Root object of the data file.
///
/// Decoding goes through a JSON object so an array root is rejected rather
/// than read positionally into the struct fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub(crate) struct UsersDocument {
    pub users: Vec<User>,
}

impl TryFrom<Map<String, Value>> for UsersDocument {
    type Error = serde_json::Error;

    fn try_from(mut root: Map<String, Value>) -> Result<Self, Self::Error> {
        let users = match root.remove("users") {
            Some(users) => serde_json::from_value(users)?,
            None => Vec::new(),
        };
        Ok(Self { users })
    }
}
