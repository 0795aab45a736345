use http::StatusCode;
use tracing::info;

use super::ScenarioError;
use super::expect::{expect_message, expect_status};
use crate::model::{ApiResponse, StoryInput, StorySummary};
use crate::{SuiteContext, endpoints};

const CREATED_MESSAGE: &str = "Successfully created!";
const EDITED_MESSAGE: &str = "Successfully edited";
const DELETED_MESSAGE: &str = "Deleted successfully!";
const NO_SPOILERS_MESSAGE: &str = "No spoilers...";
const UNABLE_TO_DELETE_MESSAGE: &str = "Unable to delete this story spoiler!";

pub(super) async fn create_with_required_fields(
    ctx: &mut SuiteContext,
) -> Result<(), ScenarioError> {
    let story = StoryInput::new(
        "Final Created Story",
        "description for the first created story",
    );

    let result = ctx.client.create(endpoints::CREATE_STORY, &story).await?;
    let response = result.as_json::<ApiResponse>();

    // Recorded before the assertions, later scenarios use whatever the service returned
    let created = response
        .as_ref()
        .ok()
        .and_then(|it| it.story_id.as_ref())
        .filter(|id| !id.is_blank());
    if let Some(id) = created {
        ctx.fixture.record_created_story(id.clone());
    }

    expect_status(&result, StatusCode::CREATED)?;
    let response = response?;
    expect_message(&response, CREATED_MESSAGE)?;
    match response.story_id {
        Some(id) if !id.is_blank() => Ok(()),
        _ => Err(ScenarioError::EmptyStoryId),
    }
}

pub(super) async fn edit_created_story(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let id = ctx.fixture.require_created_story()?;
    let story = StoryInput::new(
        "Final Created Story --- Edited",
        "description for the second created story is edited",
    );

    let result = ctx.client.edit(&endpoints::edit_story(id), &story).await?;

    expect_status(&result, StatusCode::OK)?;
    expect_message(&result.as_json()?, EDITED_MESSAGE)
}

pub(super) async fn list_all_stories(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let result = ctx.client.list(endpoints::ALL_STORIES).await?;

    expect_status(&result, StatusCode::OK)?;
    let stories = result.as_json::<Vec<StorySummary>>()?;
    info!(count = stories.len(), "stories returned");
    if stories.is_empty() {
        return Err(ScenarioError::EmptyListing);
    }
    Ok(())
}

pub(super) async fn delete_created_story(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let id = ctx.fixture.require_created_story()?;

    let result = ctx.client.delete(&endpoints::delete_story(id)).await?;

    expect_status(&result, StatusCode::OK)?;
    expect_message(&result.as_json()?, DELETED_MESSAGE)
}

pub(super) async fn create_without_required_fields(
    ctx: &mut SuiteContext,
) -> Result<(), ScenarioError> {
    let story = StoryInput::default();

    let result = ctx.client.create(endpoints::CREATE_STORY, &story).await?;

    expect_status(&result, StatusCode::BAD_REQUEST)
}

pub(super) async fn edit_missing_story(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let story = StoryInput::new(
        "Third Created Story --- Edited",
        "description for the second created story is edited",
    );

    let path = endpoints::edit_story(&ctx.missing_story_id);
    let result = ctx.client.edit(&path, &story).await?;

    expect_status(&result, StatusCode::NOT_FOUND)?;
    expect_message(&result.as_json()?, NO_SPOILERS_MESSAGE)
}

pub(super) async fn delete_missing_story(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let path = endpoints::delete_story(&ctx.missing_story_id);
    let result = ctx.client.delete(&path).await?;

    expect_status(&result, StatusCode::BAD_REQUEST)?;
    expect_message(&result.as_json()?, UNABLE_TO_DELETE_MESSAGE)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_support::{Responder, spawn_responder};
    use crate::{ApiClient, Authentication, Scenario, StoryId};

    fn context_for(responder: &Responder) -> SuiteContext {
        let client = ApiClient::builder()
            .with_base_url(responder.base_url())
            .with_authentication(Authentication::Bearer("token".into()))
            .build()
            .expect("valid client");
        SuiteContext::new(client, "23232")
    }

    #[rstest]
    #[case::create(Scenario::CreateWithRequiredFields, "201 Created", r#"{"msg":"Created","storyId":"abc"}"#, "POST /api/Story/Create ", CREATED_MESSAGE, "Created")]
    #[case::edit(Scenario::EditCreatedStory, "200 OK", r#"{"msg":"Edited"}"#, "PUT /api/Story/Edit/abc ", EDITED_MESSAGE, "Edited")]
    #[case::delete(Scenario::DeleteCreatedStory, "200 OK", r#"{"msg":"Deleted"}"#, "DELETE /api/Story/Delete/abc ", DELETED_MESSAGE, "Deleted")]
    #[case::edit_missing(Scenario::EditMissingStory, "404 Not Found", r#"{"msg":"Not found"}"#, "PUT /api/Story/Edit/23232 ", NO_SPOILERS_MESSAGE, "Not found")]
    #[case::delete_missing(Scenario::DeleteMissingStory, "400 Bad Request", r#"{"msg":"Nope"}"#, "DELETE /api/Story/Delete/23232 ", UNABLE_TO_DELETE_MESSAGE, "Nope")]
    #[tokio::test]
    async fn should_fail_on_unexpected_message(
        #[case] scenario: Scenario,
        #[case] status: &'static str,
        #[case] body: &'static str,
        #[case] request_line: &str,
        #[case] expected_message: &str,
        #[case] actual_message: &str,
    ) {
        let responder = spawn_responder(status, body).await;
        let mut ctx = context_for(&responder);
        ctx.fixture.record_created_story(StoryId::from("abc"));

        let result = scenario.run(&mut ctx).await;

        let Err(ScenarioError::UnexpectedMessage { expected, actual }) = &result else {
            panic!("expected a message mismatch, got {result:?}");
        };
        assert_eq!(*expected, expected_message);
        assert_eq!(actual.as_str(), actual_message);
        let request = responder.request().await;
        assert!(request.starts_with(request_line), "{request}");
    }

    #[tokio::test]
    async fn should_record_created_story_before_checking_status() {
        let responder = spawn_responder(
            "500 Internal Server Error",
            r#"{"msg":"Successfully created!","storyId":"abc"}"#,
        )
        .await;
        let mut ctx = context_for(&responder);

        let result = Scenario::CreateWithRequiredFields.run(&mut ctx).await;

        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedStatus { actual, .. }) if actual == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(
            ctx.fixture.last_created_story_id(),
            Some(&StoryId::from("abc"))
        );
    }

    #[tokio::test]
    async fn should_fail_creation_without_story_id() {
        let responder = spawn_responder("201 Created", r#"{"msg":"Successfully created!"}"#).await;
        let mut ctx = context_for(&responder);

        let result = Scenario::CreateWithRequiredFields.run(&mut ctx).await;

        assert!(matches!(result, Err(ScenarioError::EmptyStoryId)));
        assert_eq!(ctx.fixture.last_created_story_id(), None);
    }

    #[tokio::test]
    async fn should_ignore_blank_story_id() {
        let responder = spawn_responder(
            "201 Created",
            r#"{"msg":"Successfully created!","storyId":"  "}"#,
        )
        .await;
        let mut ctx = context_for(&responder);

        let result = Scenario::CreateWithRequiredFields.run(&mut ctx).await;

        assert!(matches!(result, Err(ScenarioError::EmptyStoryId)));
        assert_eq!(ctx.fixture.last_created_story_id(), None);
    }

    #[tokio::test]
    async fn should_pass_on_expected_answer() {
        let responder = spawn_responder("200 OK", r#"{"msg":"Successfully edited"}"#).await;
        let mut ctx = context_for(&responder);
        ctx.fixture.record_created_story(StoryId::from("abc"));

        let result = Scenario::EditCreatedStory.run(&mut ctx).await;

        assert!(result.is_ok(), "{result:?}");
    }
}
