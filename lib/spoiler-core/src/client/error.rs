use super::AuthenticationError;

/// Errors that can occur when using the [`ApiClient`](super::ApiClient).
///
/// Covers transport failures, URL construction problems and response decoding.
/// A non-success HTTP status is *not* an error at this level: the client hands
/// every status back to the caller so that negative paths can be asserted.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when the connection cannot be established or the body cannot be read.
    ReqwestError(reqwest::Error),

    /// URL parsing error when joining the base URL and a request path.
    UrlError(url::ParseError),

    /// The authentication could not be converted into a header.
    AuthenticationError(AuthenticationError),

    /// JSON serialization of a request body failed.
    JsonValueError(serde_json::Error),

    /// Invalid base URL configuration.
    #[display("Invalid base URL '{url}': {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Description of why the URL is invalid.
        error: String,
    },

    /// JSON response deserialization failure.
    ///
    /// Occurs when the response body does not match the expected schema.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// The JSON path where the error occurred.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse (truncated).
        body: String,
    },
}
