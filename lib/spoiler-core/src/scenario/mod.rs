//! The ordered scenarios of the suite.
//!
//! | # | Scenario | Call | Expected |
//! |---|----------|------|----------|
//! | 1 | [`CreateWithRequiredFields`](Scenario::CreateWithRequiredFields) | `POST /api/Story/Create` | `201`, `Successfully created!`, story id |
//! | 2 | [`EditCreatedStory`](Scenario::EditCreatedStory) | `PUT /api/Story/Edit/{id}` | `200`, `Successfully edited` |
//! | 3 | [`ListAllStories`](Scenario::ListAllStories) | `GET /api/Story/All` | `200`, non-empty list |
//! | 4 | [`DeleteCreatedStory`](Scenario::DeleteCreatedStory) | `DELETE /api/Story/Delete/{id}` | `200`, `Deleted successfully!` |
//! | 5 | [`CreateWithoutRequiredFields`](Scenario::CreateWithoutRequiredFields) | `POST /api/Story/Create` | `400` |
//! | 6 | [`EditMissingStory`](Scenario::EditMissingStory) | `PUT /api/Story/Edit/23232` | `404`, `No spoilers...` |
//! | 7 | [`DeleteMissingStory`](Scenario::DeleteMissingStory) | `DELETE /api/Story/Delete/23232` | `400`, `Unable to delete this story spoiler!` |
//!
//! Scenarios 2 and 4 work on the story recorded by scenario 1 in the
//! [`FixtureState`](crate::FixtureState), hence the fixed order.

use tracing::info;

use crate::SuiteContext;

mod error;
pub use self::error::ScenarioError;

mod expect;
mod stories;

/// One step of the ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Scenario {
    /// Creates a story with title and description.
    #[display("create_story_with_required_fields")]
    CreateWithRequiredFields,
    /// Edits the story created by the first scenario.
    #[display("edit_created_story")]
    EditCreatedStory,
    /// Lists every story.
    #[display("list_all_stories")]
    ListAllStories,
    /// Deletes the story created by the first scenario.
    #[display("delete_created_story")]
    DeleteCreatedStory,
    /// Tries to create a story without any field.
    #[display("create_story_without_required_fields")]
    CreateWithoutRequiredFields,
    /// Tries to edit a story that does not exist.
    #[display("edit_missing_story")]
    EditMissingStory,
    /// Tries to delete a story that does not exist.
    #[display("delete_missing_story")]
    DeleteMissingStory,
}

impl Scenario {
    /// Execution order of the suite.
    pub const ORDERED: [Self; 7] = [
        Self::CreateWithRequiredFields,
        Self::EditCreatedStory,
        Self::ListAllStories,
        Self::DeleteCreatedStory,
        Self::CreateWithoutRequiredFields,
        Self::EditMissingStory,
        Self::DeleteMissingStory,
    ];

    /// 1-based position in [`Scenario::ORDERED`].
    pub fn order(self) -> usize {
        Self::ORDERED
            .iter()
            .position(|it| *it == self)
            .map_or(0, |index| index + 1)
    }

    /// Runs the scenario against the context.
    ///
    /// # Errors
    ///
    /// Returns the first failed expectation, or the transport error of the call.
    pub async fn run(self, ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
        info!(order = self.order(), scenario = %self, "running");
        match self {
            Self::CreateWithRequiredFields => stories::create_with_required_fields(ctx).await,
            Self::EditCreatedStory => stories::edit_created_story(ctx).await,
            Self::ListAllStories => stories::list_all_stories(ctx).await,
            Self::DeleteCreatedStory => stories::delete_created_story(ctx).await,
            Self::CreateWithoutRequiredFields => {
                stories::create_without_required_fields(ctx).await
            }
            Self::EditMissingStory => stories::edit_missing_story(ctx).await,
            Self::DeleteMissingStory => stories::delete_missing_story(ctx).await,
        }
    }
}
