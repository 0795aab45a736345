use http::StatusCode;

use crate::ApiClientError;

/// Why a scenario failed.
///
/// A scenario failure is reported in the [`SuiteReport`](crate::SuiteReport)
/// and never stops the following scenarios.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ScenarioError {
    /// Transport or decoding error of the call under test.
    #[display("{_0}")]
    ClientError(ApiClientError),

    /// The service answered with another status code.
    #[display("expected status {expected}, got {actual}: {body}")]
    #[from(skip)]
    UnexpectedStatus {
        /// Status the scenario asserts.
        expected: StatusCode,
        /// Status received.
        actual: StatusCode,
        /// Response body (truncated).
        body: String,
    },

    /// The service answered with another message.
    #[display("expected message {expected:?}, got {actual:?}")]
    #[from(skip)]
    UnexpectedMessage {
        /// Message the scenario asserts.
        expected: &'static str,
        /// Message received.
        actual: String,
    },

    /// The scenario needs the story of the creation scenario, which did not
    /// record any in this run.
    #[display("no story was created earlier in this run")]
    MissingStoryId,

    /// The creation answered without a usable story id.
    #[display("the service returned an empty story id")]
    EmptyStoryId,

    /// The listing is empty.
    #[display("the story listing is empty")]
    EmptyListing,
}
