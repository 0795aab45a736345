use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier handed out at creation; any string is accepted in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Story fields as sent by clients. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDraft {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl StoryDraft {
    /// Title and description are required, the url is not.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// A stored story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub story_id: StoryId,
    #[serde(flatten)]
    pub data: StoryDraft,
}
