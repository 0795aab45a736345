use tracing::debug;

use crate::{ScenarioError, StoryId};

/// State shared by the scenarios of one run.
///
/// The only shared value is the identifier of the last story created by the
/// suite. It is empty at the start of every run and only meaningful once the
/// creation scenario has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureState {
    last_created_story_id: Option<StoryId>,
}

impl FixtureState {
    /// Remembers the story returned by the creation scenario.
    pub fn record_created_story(&mut self, id: StoryId) {
        debug!(%id, "recording created story");
        self.last_created_story_id = Some(id);
    }

    /// The last created story, if any.
    pub fn last_created_story_id(&self) -> Option<&StoryId> {
        self.last_created_story_id.as_ref()
    }

    /// The last created story, required by the edit and delete scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::MissingStoryId`] when no story was created in this run.
    pub fn require_created_story(&self) -> Result<&StoryId, ScenarioError> {
        self.last_created_story_id
            .as_ref()
            .ok_or(ScenarioError::MissingStoryId)
    }
}
