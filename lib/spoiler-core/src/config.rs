use std::env::{self, VarError};

use url::Url;

use crate::{Credentials, StoryId};

/// Public deployment of the Story Spoiler service.
pub const DEFAULT_BASE_URL: &str = "https://d3s5nxhwblsjbi.cloudfront.net";

/// Identifier that never matches a story, used by the negative scenarios.
pub const DEFAULT_MISSING_STORY_ID: &str = "23232";

/// Configuration keys, also used as environment variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteEnv {
    /// Base URL of the service under test (optional).
    BaseUrl,
    /// Login account name (required).
    Username,
    /// Login password (required).
    Password,
    /// Story id the negative scenarios use (optional).
    MissingStoryId,
}

impl SuiteEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "STORY_SPOILER_BASE_URL",
            Self::Username => "STORY_SPOILER_USERNAME",
            Self::Password => "STORY_SPOILER_PASSWORD",
            Self::MissingStoryId => "STORY_SPOILER_MISSING_ID",
        }
    }

    /// Reads the variable from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when the value is not valid UTF-8.
    pub fn read(self) -> Result<Option<String>, ConfigError> {
        match env::var(self.as_str()) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key: self }),
        }
    }
}

/// Configuration errors, fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum ConfigError {
    /// A required value is absent.
    #[display("Missing required configuration {}", key.as_str())]
    Missing {
        /// The missing key.
        key: SuiteEnv,
    },

    /// A value is present but empty.
    #[display("Configuration {} must not be empty", key.as_str())]
    Empty {
        /// The empty key.
        key: SuiteEnv,
    },

    /// A value is not valid UTF-8.
    #[display("Configuration {} is not valid UTF-8", key.as_str())]
    NotUnicode {
        /// The invalid key.
        key: SuiteEnv,
    },

    /// The base URL cannot be parsed.
    #[display("Invalid base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Everything a run needs to reach and log into the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Service base URL.
    pub base_url: Url,
    /// Login account.
    pub credentials: Credentials,
    /// Story id that does not exist on the service.
    pub missing_story_id: StoryId,
}

impl SuiteConfig {
    /// Creates a configuration with the default missing story id.
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            missing_story_id: StoryId::from(DEFAULT_MISSING_STORY_ID),
        }
    }

    /// Overrides the story id used by the negative scenarios.
    #[must_use]
    pub fn with_missing_story_id(mut self, id: impl Into<StoryId>) -> Self {
        self.missing_story_id = id.into();
        self
    }

    /// Loads the configuration from the `STORY_SPOILER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails when the credentials are absent, or a value is empty, not UTF-8,
    /// or not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(SuiteEnv::read)
    }

    /// Loads the configuration from an arbitrary source of values.
    ///
    /// # Errors
    ///
    /// Same as [`SuiteConfig::from_env`], plus any error of `lookup`.
    ///
    /// ```rust
    /// use spoiler_core::{SuiteConfig, SuiteEnv};
    ///
    /// let config = SuiteConfig::load(|key| {
    ///     Ok(match key {
    ///         SuiteEnv::Username => Some("alice".to_string()),
    ///         SuiteEnv::Password => Some("secret".to_string()),
    ///         _ => None,
    ///     })
    /// })
    /// .expect("valid configuration");
    ///
    /// assert_eq!(config.missing_story_id.as_str(), "23232");
    /// ```
    pub fn load<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(SuiteEnv) -> Result<Option<String>, ConfigError>,
    {
        let mut read = |key: SuiteEnv| -> Result<Option<String>, ConfigError> {
            match lookup(key)? {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
                other => Ok(other),
            }
        };

        let base_url = read(SuiteEnv::BaseUrl)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            value: base_url.clone(),
            message: err.to_string(),
        })?;

        let username = read(SuiteEnv::Username)?.ok_or(ConfigError::Missing {
            key: SuiteEnv::Username,
        })?;
        let password = read(SuiteEnv::Password)?.ok_or(ConfigError::Missing {
            key: SuiteEnv::Password,
        })?;
        let missing_story_id = read(SuiteEnv::MissingStoryId)?
            .unwrap_or_else(|| DEFAULT_MISSING_STORY_ID.to_string());

        Ok(Self::new(base_url, Credentials::new(username, password))
            .with_missing_story_id(missing_story_id))
    }
}
