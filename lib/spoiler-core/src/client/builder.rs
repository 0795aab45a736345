use std::net::{IpAddr, Ipv4Addr};

use url::Url;

use super::{ApiClient, ApiClientError, Authentication};

/// Builder for [`ApiClient`] instances.
///
/// # Default Configuration
///
/// - **Base URL**: `http://127.0.0.1:80/`
/// - **Authentication**: None (requests are anonymous)
///
/// # Example
///
/// ```rust
/// use spoiler_core::{ApiClient, Authentication};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_base_url("https://d3s5nxhwblsjbi.cloudfront.net")
///     .with_authentication(Authentication::Bearer("token".into()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: reqwest::Client,
    base_url: String,
    authentication: Option<Authentication>,
}

impl ApiClientBuilder {
    /// Builds the final `ApiClient` instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] if the base URL cannot be
    /// parsed or cannot carry a path (e.g. `mailto:` URLs).
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            base_url,
            authentication,
        } = self;

        let parsed = Url::parse(&base_url).map_err(|err| ApiClientError::InvalidBaseUrl {
            url: base_url.clone(),
            error: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBaseUrl {
                url: base_url,
                error: "cannot be a base".to_string(),
            });
        }

        Ok(ApiClient {
            client,
            base_url: parsed,
            authentication,
        })
    }

    /// Sets the base URL every request path is resolved against.
    ///
    /// A path component in the base URL is kept as a prefix:
    /// `https://host/v1` + `/api/Story/All` gives `https://host/v1/api/Story/All`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the authentication applied to all requests made by the client.
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        let host = IpAddr::V4(Ipv4Addr::LOCALHOST);
        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{host}:80/"),
            authentication: None,
        }
    }
}
