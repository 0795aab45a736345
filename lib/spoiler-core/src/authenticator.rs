use std::fmt;

use tracing::{debug, info};
use url::Url;

use crate::model::{LoginRequest, LoginResponse};
use crate::{ApiClient, SecureString, SuiteError, endpoints};

/// Account used to log into the service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: SecureString,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(username: impl Into<String>, password: impl Into<SecureString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Logs into the service and returns the bearer token.
///
/// The call goes through an anonymous client; the status code is logged but not
/// checked, only the presence of a non-empty `accessToken` matters.
///
/// # Errors
///
/// Fails when the service is unreachable, the body is not the expected JSON,
/// or the token is empty. There is nothing to recover: without a token every
/// scenario is meaningless.
pub async fn authenticate(
    base_url: &Url,
    credentials: &Credentials,
) -> Result<SecureString, SuiteError> {
    let client = ApiClient::builder()
        .with_base_url(base_url.as_str())
        .build()?;

    let request = LoginRequest {
        username: &credentials.username,
        password: &credentials.password,
    };
    debug!(username = %credentials.username, "logging in");
    let result = client
        .create(endpoints::AUTHENTICATION, &request)
        .await
        .map_err(|source| SuiteError::AuthenticationUnreachable { source })?;
    info!(status = %result.status_code(), "login answered");

    let LoginResponse { access_token } = result
        .as_json()
        .map_err(|source| SuiteError::MalformedLoginResponse {
            status: result.status_code().as_u16(),
            source,
        })?;

    if access_token.is_empty() {
        return Err(SuiteError::EmptyAccessToken);
    }

    Ok(access_token)
}
