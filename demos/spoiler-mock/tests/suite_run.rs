#![allow(missing_docs)]

use rstest::rstest;
use tracing::info;

use spoiler_core::model::StorySummary;
use spoiler_core::{Credentials, Scenario, ScenarioError, SuiteContext, SuiteError, endpoints, run_suite};

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_pass_every_scenario(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let report = run_suite(&app.config()).await?;
    info!("\n{report}");

    let names = report
        .outcomes()
        .iter()
        .map(|it| format!("{} {} {}", it.scenario.order(), it.scenario, it.is_passed()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(names, @r"
    1 create_story_with_required_fields true
    2 edit_created_story true
    3 list_all_stories true
    4 delete_created_story true
    5 create_story_without_required_fields true
    6 edit_missing_story true
    7 delete_missing_story true
    ");
    assert!(report.is_success());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_abort_setup_on_bad_credentials(#[future] app: TestApp) {
    let app = app.await;
    let mut config = app.config();
    config.credentials = Credentials::new(USERNAME, "wrong password");

    let result = SuiteContext::setup(&config).await;

    let error = result.expect_err("login refused");
    assert!(
        matches!(error, SuiteError::MalformedLoginResponse { status: 401, .. }),
        "{error}"
    );
}

#[rstest]
#[tokio::test]
async fn should_fail_edit_and_delete_without_creation(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    let mut ctx = app.context().await?;

    let edit = ctx.run_scenario(Scenario::EditCreatedStory).await;
    let delete = ctx.run_scenario(Scenario::DeleteCreatedStory).await;
    ctx.teardown();

    assert!(matches!(edit.failure, Some(ScenarioError::MissingStoryId)));
    assert!(matches!(delete.failure, Some(ScenarioError::MissingStoryId)));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_repeat_negative_scenarios(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let first = run_suite(&app.config()).await?;
    let second = run_suite(&app.config()).await?;

    for scenario in [
        Scenario::CreateWithoutRequiredFields,
        Scenario::EditMissingStory,
        Scenario::DeleteMissingStory,
    ] {
        for report in [&first, &second] {
            let outcome = report.outcome(scenario).expect("scenario ran");
            assert!(outcome.is_passed(), "{outcome}");
        }
    }
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_remove_deleted_story_from_listing(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    let mut ctx = app.context().await?;

    for scenario in [Scenario::CreateWithRequiredFields, Scenario::EditCreatedStory] {
        let outcome = ctx.run_scenario(scenario).await;
        assert!(outcome.is_passed(), "{outcome}");
    }
    let created = ctx
        .fixture()
        .last_created_story_id()
        .cloned()
        .expect("story recorded");

    let listed = |stories: &[StorySummary]| {
        stories
            .iter()
            .any(|it| it.story_id.as_ref() == Some(&created))
    };

    let before = ctx.client().list(endpoints::ALL_STORIES).await?;
    assert!(listed(&before.as_json::<Vec<StorySummary>>()?));

    let outcome = ctx.run_scenario(Scenario::DeleteCreatedStory).await;
    assert!(outcome.is_passed(), "{outcome}");

    let after = ctx.client().list(endpoints::ALL_STORIES).await?;
    assert!(!listed(&after.as_json::<Vec<StorySummary>>()?));

    ctx.teardown();
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_report_empty_listing(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    let mut ctx = app.context().await?;

    let outcome = ctx.run_scenario(Scenario::ListAllStories).await;
    ctx.teardown();

    assert!(matches!(outcome.failure, Some(ScenarioError::EmptyListing)));
    Ok(())
}
