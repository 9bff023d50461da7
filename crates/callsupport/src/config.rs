//! Client identification settings.
//!
//! Every request carries two headers that identify the calling library: an
//! `x-api-client` header made of space-separated `name/version` tokens, and
//! `User-Agent`. [`ClientIdentity`] holds the tokens for both and can be loaded
//! from configuration like any other serde type.

use crate::Error;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default user agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Tokens identifying the client library in request headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClientIdentity {
    /// Language token, e.g. `rust`
    #[validate(length(min = 1, max = 32))]
    #[serde(default = "default_language")]
    pub language: String,

    /// Optional language version appended to the language token
    #[validate(length(min = 1, max = 32))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    /// Library name token
    #[validate(length(min = 1, max = 64))]
    #[serde(default = "default_library")]
    pub library: String,

    /// Library version token
    #[validate(length(min = 1, max = 32))]
    #[serde(default = "default_library_version")]
    pub library_version: String,

    /// Value of the `User-Agent` header
    #[validate(length(min = 1, max = 256))]
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_language() -> String {
    "rust".to_string()
}

fn default_library() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ClientIdentity {
    /// Create an identity for the named library.
    ///
    /// # Arguments
    ///
    /// * `library` - Library name token (e.g., "storage-client")
    /// * `library_version` - Library version token (e.g., "1.4.0")
    ///
    /// # Errors
    ///
    /// Returns a validation error if either token is empty or too long.
    pub fn new(
        library: impl Into<String>,
        library_version: impl Into<String>,
    ) -> Result<Self, Error> {
        let identity = Self {
            library: library.into(),
            library_version: library_version.into(),
            ..Self::default()
        };

        identity.validate()?;

        Ok(identity)
    }

    /// Set the language version token.
    #[must_use]
    pub fn with_language_version(mut self, version: impl Into<String>) -> Self {
        self.language_version = Some(version.into());
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check a loaded or modified identity.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the offending fields.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()?;
        Ok(())
    }

    /// Value of the `x-api-client` header.
    ///
    /// Formatted as `<language>[/<language_version>] <library>/<library_version>`.
    #[must_use]
    pub fn api_client_header(&self) -> String {
        match &self.language_version {
            Some(version) => format!(
                "{}/{} {}/{}",
                self.language, version, self.library, self.library_version
            ),
            None => format!(
                "{} {}/{}",
                self.language, self.library, self.library_version
            ),
        }
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            language: default_language(),
            language_version: None,
            library: default_library(),
            library_version: default_library_version(),
            user_agent: default_user_agent(),
        }
    }
}
