//! Suite lifecycle: setup, the ordered driver loop and teardown.

use std::time::Instant;

use tracing::{error, info};

use crate::client::Authentication;
use crate::{ApiClient, FixtureState, Scenario, StoryId, SuiteConfig, authenticator};

mod error;
pub use self::error::SuiteError;

mod report;
pub use self::report::{ScenarioOutcome, SuiteReport};

/// State shared by the scenarios of one run.
///
/// The context owns the authenticated client and the fixture slot; scenarios
/// receive it as `&mut`, one at a time.
#[derive(Debug)]
pub struct SuiteContext {
    pub(crate) client: ApiClient,
    pub(crate) fixture: FixtureState,
    pub(crate) missing_story_id: StoryId,
}

impl SuiteContext {
    /// Wraps an already configured client, with an empty fixture.
    pub fn new(client: ApiClient, missing_story_id: impl Into<StoryId>) -> Self {
        Self {
            client,
            fixture: FixtureState::default(),
            missing_story_id: missing_story_id.into(),
        }
    }

    /// Authenticates once and builds the client used by every scenario.
    ///
    /// # Errors
    ///
    /// Fails when the login call cannot be completed or the client cannot be built.
    pub async fn setup(config: &SuiteConfig) -> Result<Self, SuiteError> {
        let token = authenticator::authenticate(&config.base_url, &config.credentials)
            .await
            .inspect_err(|err| error!(%err, "authentication failed"))?;
        info!(username = %config.credentials.username, "authenticated");

        let client = ApiClient::builder()
            .with_base_url(config.base_url.as_str())
            .with_authentication(Authentication::Bearer(token))
            .build()?;

        Ok(Self::new(client, config.missing_story_id.clone()))
    }

    /// The authenticated client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The state shared between scenarios.
    pub fn fixture(&self) -> &FixtureState {
        &self.fixture
    }

    /// Runs one scenario and records how it went.
    pub async fn run_scenario(&mut self, scenario: Scenario) -> ScenarioOutcome {
        let start = Instant::now();
        let result = scenario.run(self).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => info!(%scenario, ?elapsed, "passed"),
            Err(err) => info!(%scenario, ?elapsed, %err, "failed"),
        }

        ScenarioOutcome {
            scenario,
            failure: result.err(),
            elapsed,
        }
    }

    /// Runs every scenario once, in [`Scenario::ORDERED`] order.
    ///
    /// A failed scenario does not stop the following ones.
    pub async fn run_all(&mut self) -> SuiteReport {
        let mut report = SuiteReport::default();
        for scenario in Scenario::ORDERED {
            let outcome = self.run_scenario(scenario).await;
            report.push(outcome);
        }
        report
    }

    /// Releases the client.
    pub fn teardown(self) {
        self.client.close();
    }
}

/// Setup, every scenario, then teardown.
///
/// # Errors
///
/// Only setup failures are returned, scenario failures are in the report.
pub async fn run_suite(config: &SuiteConfig) -> Result<SuiteReport, SuiteError> {
    let mut ctx = SuiteContext::setup(config).await?;
    let report = ctx.run_all().await;
    ctx.teardown();

    info!(
        passed = report.passed(),
        failed = report.failed(),
        "suite finished"
    );
    Ok(report)
}
