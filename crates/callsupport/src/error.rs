//! Error types for request assembly.
//!
//! Query parameter operations are total and never fail. Errors only arise
//! while building headers or loading client configuration.

use thiserror::Error;

/// Main error type for request assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Header key/value overrides were not supplied in pairs.
    ///
    /// This is a caller bug, not an environmental failure.
    #[error("Header key/value list has odd length {len}; every key needs a value")]
    OddHeaderPairs {
        /// Length of the offending list
        len: usize,
    },

    /// Header name is not a valid HTTP token
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    /// Header value contains bytes not allowed in HTTP headers
    #[error("Invalid value for header {name}")]
    InvalidHeaderValue {
        /// Header the value was destined for
        name: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Specialized result type for request assembly.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OddHeaderPairs { .. } => "ODD_HEADER_PAIRS",
            Self::InvalidHeaderName(_) => "INVALID_HEADER_NAME",
            Self::InvalidHeaderValue { .. } => "INVALID_HEADER_VALUE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
        }
    }

    /// Returns true if the error reports a broken calling contract.
    ///
    /// Such errors must not be retried or recovered from; the calling code
    /// has to be fixed.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::OddHeaderPairs { .. })
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
