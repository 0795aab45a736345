use http::header::{CONTENT_TYPE, HeaderValue};
use http::Method;
use reqwest::{Body, Request};
use serde::Serialize;
use tracing::debug;
use url::Url;

mod builder;
pub use self::builder::ApiClientBuilder;

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod result;
pub use self::result::RawResult;

mod error;
pub use self::error::ApiClientError;

pub(crate) const BODY_MAX_LENGTH: usize = 1024;

/// Thin HTTP client bound to one service and one set of credentials.
///
/// Built once with a base URL and an [`Authentication`]; every request then
/// carries the bearer token without the caller attaching it. Each operation
/// issues exactly one request and returns the status code with the raw body,
/// whatever the status is.
///
/// | Operation | Method |
/// |-----------|--------|
/// | [`create`](Self::create) | `POST` |
/// | [`edit`](Self::edit) | `PUT` |
/// | [`list`](Self::list) | `GET` |
/// | [`delete`](Self::delete) | `DELETE` |
///
/// # Example
///
/// ```rust,no_run
/// use spoiler_core::{ApiClient, Authentication};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_base_url("https://d3s5nxhwblsjbi.cloudfront.net")
///     .with_authentication(Authentication::Bearer("token".into()))
///     .build()?;
///
/// let result = client.list("/api/Story/All").await?;
/// println!("{} -> {}", result.status_code(), result.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    authentication: Option<Authentication>,
}

impl ApiClient {
    /// Starts building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends `body` as JSON with `POST`.
    ///
    /// # Errors
    ///
    /// Fails on body serialization or transport errors, never on the status code.
    pub async fn create<B>(&self, path: &str, body: &B) -> Result<RawResult, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.exchange(Method::POST, path, Some(body)).await
    }

    /// Sends `body` as JSON with `PUT`.
    ///
    /// # Errors
    ///
    /// Fails on body serialization or transport errors, never on the status code.
    pub async fn edit<B>(&self, path: &str, body: &B) -> Result<RawResult, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.exchange(Method::PUT, path, Some(body)).await
    }

    /// Issues a `GET`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, never on the status code.
    pub async fn list(&self, path: &str) -> Result<RawResult, ApiClientError> {
        self.exchange(Method::GET, path, None).await
    }

    /// Issues a `DELETE`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, never on the status code.
    pub async fn delete(&self, path: &str) -> Result<RawResult, ApiClientError> {
        self.exchange(Method::DELETE, path, None).await
    }

    /// Releases the client and its pooled connections.
    pub fn close(self) {
        debug!(base_url = %self.base_url, "closing client");
        drop(self);
    }

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResult, ApiClientError> {
        let url = Self::build_url(&self.base_url, path)?;
        let request = Self::build_request(method, url, body, self.authentication.as_ref())?;

        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");

        let status = response.status();
        let text = response.text().await?;

        Ok(RawResult::new(status, text))
    }

    fn build_url(base_url: &Url, path: &str) -> Result<Url, ApiClientError> {
        let url = format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = url.parse::<Url>()?;
        Ok(url)
    }

    fn build_request(
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        authentication: Option<&Authentication>,
    ) -> Result<Request, ApiClientError> {
        let mut request = Request::new(method, url);
        let req_headers = request.headers_mut();

        if let Some(auth) = authentication {
            let (header_name, header_value) = auth.to_header()?;
            req_headers.insert(header_name, header_value);
        }

        if let Some(body) = body {
            req_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }
}
