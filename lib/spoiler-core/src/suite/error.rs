use crate::ApiClientError;

/// Fatal errors raised before any scenario runs.
///
/// A setup failure aborts the whole run; individual scenario failures are
/// reported through [`ScenarioError`](crate::ScenarioError) instead.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SuiteError {
    /// The API client could not be built (e.g. invalid base URL).
    #[display("Cannot build the API client: {_0}")]
    ClientError(ApiClientError),

    /// The login request did not get any response.
    #[display("Authentication endpoint unreachable: {source}")]
    #[from(skip)]
    AuthenticationUnreachable {
        /// The transport error.
        source: ApiClientError,
    },

    /// The login response is not the expected JSON.
    #[display("Unexpected login response (status {status}): {source}")]
    #[from(skip)]
    MalformedLoginResponse {
        /// Status code of the login response.
        status: u16,
        /// The decoding error.
        source: ApiClientError,
    },

    /// The service answered with an empty token.
    #[display("The service returned an empty access token")]
    EmptyAccessToken,
}
