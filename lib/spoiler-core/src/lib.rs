//! # Spoiler Core
//!
//! Ordered conformance suite for the Story Spoiler HTTP API.
//!
//! A run logs in once, then executes seven scenarios in a fixed order against
//! the story endpoints:
//!
//! 1. create a story with the required fields,
//! 2. edit that story,
//! 3. list every story,
//! 4. delete the created story,
//! 5. create a story without any field,
//! 6. edit a story that does not exist,
//! 7. delete a story that does not exist.
//!
//! Scenarios 2 and 4 reuse the story id recorded by scenario 1 in the
//! [`FixtureState`]. Every scenario is reported on its own in the
//! [`SuiteReport`]; a failure never stops the following scenarios.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spoiler_core::{SuiteConfig, run_suite};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SuiteConfig::from_env()?;
//! let report = run_suite(&config).await?;
//!
//! println!("{report}");
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Step by step
//!
//! ```rust,no_run
//! use spoiler_core::{Scenario, SuiteConfig, SuiteContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SuiteConfig::from_env()?;
//! let mut ctx = SuiteContext::setup(&config).await?;
//!
//! let outcome = ctx.run_scenario(Scenario::CreateWithRequiredFields).await;
//! println!("{outcome}");
//! println!("created: {:?}", ctx.fixture().last_created_story_id());
//!
//! ctx.teardown();
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `STORY_SPOILER_BASE_URL` | `https://d3s5nxhwblsjbi.cloudfront.net` |
//! | `STORY_SPOILER_USERNAME` | required |
//! | `STORY_SPOILER_PASSWORD` | required |
//! | `STORY_SPOILER_MISSING_ID` | `23232` |

mod client;
pub use self::client::{
    ApiClient, ApiClientBuilder, ApiClientError, Authentication, AuthenticationError, RawResult,
    SecureString,
};

pub mod endpoints;
pub mod model;
pub use self::model::{ApiResponse, StoryId, StoryInput, StorySummary};

mod authenticator;
pub use self::authenticator::{Credentials, authenticate};

mod fixture;
pub use self::fixture::FixtureState;

mod scenario;
pub use self::scenario::{Scenario, ScenarioError};

mod suite;
pub use self::suite::{ScenarioOutcome, SuiteContext, SuiteError, SuiteReport, run_suite};

mod config;
pub use self::config::{
    ConfigError, DEFAULT_BASE_URL, DEFAULT_MISSING_STORY_ID, SuiteConfig, SuiteEnv,
};

pub mod test_server;

#[cfg(test)]
mod test_support;
