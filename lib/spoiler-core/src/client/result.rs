use http::StatusCode;
use serde::de::DeserializeOwned;

use super::{ApiClientError, BODY_MAX_LENGTH};

/// Status code and raw body text of a single response.
///
/// Every call of the [`ApiClient`](super::ApiClient) produces a `RawResult`,
/// whatever the status code is. Decoding is left to the caller through
/// [`RawResult::as_json`].
///
/// ```rust
/// use http::StatusCode;
/// use spoiler_core::RawResult;
/// # use serde::Deserialize;
/// # #[derive(Deserialize)]
/// # struct Message { msg: String }
///
/// let result = RawResult::new(StatusCode::OK, r#"{"msg":"Successfully edited"}"#);
/// let message: Message = result.as_json()?;
/// assert_eq!(message.msg, "Successfully edited");
/// # Ok::<(), spoiler_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    status: StatusCode,
    body: String,
}

impl RawResult {
    /// Creates a result from a status code and a body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns the response body as received.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] with the JSON path of the first
    /// mismatch when the body is not valid JSON or does not match `T`.
    pub fn as_json<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let deserializer = &mut serde_json::Deserializer::from_str(&self.body);
        serde_path_to_error::deserialize(deserializer).map_err(|err| ApiClientError::JsonError {
            path: err.path().to_string(),
            error: err.into_inner(),
            body: truncate_body(&self.body),
        })
    }
}

pub(in crate::client) fn truncate_body(body: &str) -> String {
    if body.len() <= BODY_MAX_LENGTH {
        return body.to_string();
    }
    let mut end = BODY_MAX_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    let head = body.get(..end).unwrap_or_default();
    format!("{head}... (truncated)")
}
