use std::fmt;

use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors raised while turning an [`Authentication`] into a request header.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters or format issue.
        message: String,
    },
}

/// Secure wrapper for sensitive string data that automatically zeroes memory on drop.
///
/// Used for the login password and for the bearer token handed out by the service.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    ///
    /// The returned reference should not be stored for extended periods.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the wrapped value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn mask_sensitive(value: &str) -> String {
        if value.len() <= 8 {
            "***".to_string()
        } else {
            let head = value.get(..4).unwrap_or_default();
            let tail = value.get(value.len() - 4..).unwrap_or_default();
            format!("{head}...{tail}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl serde::Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SecureString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Authentication attached to every request sent by an [`ApiClient`](super::ApiClient).
///
/// The Story Spoiler service only issues JWT bearer tokens, so this is the
/// single supported scheme.
///
/// ```rust
/// use spoiler_core::Authentication;
///
/// let auth = Authentication::Bearer("eyJhbGciOi...".into());
/// ```
#[derive(Clone)]
pub enum Authentication {
    /// Bearer token authentication (RFC 6750).
    /// Adds `Authorization: Bearer <token>` header.
    Bearer(SecureString),
}

impl Authentication {
    /// Converts the authentication into an HTTP header.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` if the token contains characters that are
    /// not allowed in a header value.
    pub fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::Bearer(token) => {
                let header_value = format!("Bearer {}", token.as_str());
                let mut value = HeaderValue::from_str(&header_value).map_err(|err| {
                    AuthenticationError::InvalidBearerToken {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Ok((AUTHORIZATION, value))
            }
        }
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => write!(f, "Bearer {token}"),
        }
    }
}
