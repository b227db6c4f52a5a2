//! User record model.
//!
//! A record aggregates a customer's profile with their account, card,
//! enabled features and news feed. Only the identifier is owned by the
//! store; everything else is supplied by clients and replaced wholesale on
//! update.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier.
///
/// Identifiers are positive and never reassigned while their record
/// exists. New identifiers are derived from the highest identifier in the
/// collection (see `UserCollection::next_id`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Identifier handed to the first record of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier following this one, or `None` once the space is exhausted.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Checking account attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Optional account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<u64>,
    /// Account number.
    #[schema(example = "01.097954-4")]
    pub number: String,
    /// Branch code.
    #[schema(example = "2030")]
    pub agency: String,
    /// Current balance.
    #[schema(example = 624.12)]
    pub balance: f64,
    /// Overdraft limit.
    #[schema(example = 1000.0)]
    pub limit: f64,
}

/// Credit card attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Card {
    /// Optional card identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<u64>,
    /// Masked card number.
    #[schema(example = "xxxx xxxx xxxx 1111")]
    pub number: String,
    /// Credit limit.
    #[schema(example = 2000.0)]
    pub limit: f64,
}

/// Shortcut shown on the user's home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    /// Optional feature identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<u64>,
    /// Icon, usually an emoji.
    #[schema(example = "💸")]
    pub icon: String,
    /// Label.
    #[schema(example = "PIX")]
    pub description: String,
}

/// Marketing message in the user's feed.
///
/// Enrichment jobs append items without an identifier, so `id` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct News {
    /// Optional news identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<u64>,
    /// Icon, usually an emoji.
    #[schema(example = "💰")]
    pub icon: String,
    /// Message text.
    #[schema(example = "Invista com sabedoria para construir seu futuro financeiro.")]
    pub description: String,
}

/// Client-supplied record body, used for both creation and replacement.
///
/// Any `id` field in the payload is ignored: identifiers are always chosen
/// by the store. Unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDraft {
    /// Display name.
    #[schema(example = "Devweekerson")]
    pub name: String,
    /// Checking account, if the user has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    /// Credit card, if the user has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Home-screen shortcuts.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Feed items.
    #[serde(default)]
    pub news: Vec<News>,
}

impl UserDraft {
    /// Draft carrying only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account: None,
            card: None,
            features: Vec::new(),
            news: Vec::new(),
        }
    }
}

/// Stored user record.
///
/// # Examples
/// ```
/// use mockbank::domain::{User, UserDraft, UserId};
///
/// let user = User::from_draft(UserId::new(7), UserDraft::named("Ana"));
/// assert_eq!(user.id().get(), 7);
/// assert_eq!(user.name(), "Ana");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = u64, example = 1)]
    id: UserId,
    #[schema(example = "Devweekerson")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    news: Vec<News>,
}

impl User {
    /// Build a record from a client body and a store-chosen identifier.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            name,
            account,
            card,
            features,
            news,
        } = draft;
        Self {
            id,
            name,
            account,
            card,
            features,
            news,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Checking account, if any.
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Credit card, if any.
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// Home-screen shortcuts.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Feed items.
    pub fn news(&self) -> &[News] {
        &self.news
    }
}

#[cfg(test)]
mod tests;
