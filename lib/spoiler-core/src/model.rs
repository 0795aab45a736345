//! Request and response schemas of the Story Spoiler API.

use serde::{Deserialize, Serialize};

use crate::SecureString;

/// Identifier assigned by the service to a story.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct StoryId(String);

impl StoryId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the service returned a blank identifier.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Body of the create and edit calls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryInput {
    /// Story title, required by the service.
    pub title: String,
    /// Story description, required by the service.
    pub description: String,
    /// Optional link, sent as an empty string when absent.
    #[serde(default)]
    pub url: String,
}

impl StoryInput {
    /// A story without url.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: String::new(),
        }
    }
}

/// Message returned by create, edit and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Human readable outcome, e.g. `Successfully created!`.
    pub msg: String,
    /// Only present on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<StoryId>,
}

/// One item of the story listing.
///
/// Every field is optional: only the listing length is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    /// Identifier of the story, also accepted as `id`.
    #[serde(default, alias = "id")]
    pub story_id: Option<StoryId>,
    /// Story title.
    #[serde(default)]
    pub title: Option<String>,
    /// Story description.
    #[serde(default)]
    pub description: Option<String>,
    /// Story link.
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of the login call.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account name.
    pub username: &'a str,
    /// Account password.
    pub password: &'a SecureString,
}

/// Response of the login call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The JWT to send as bearer token.
    pub access_token: SecureString,
}
