//! Error handling for libminutes
//!
//! Every remote call reports failure through this type. The orchestrator never
//! lets one escape a run: it turns each into a logged failure and an explicit
//! step outcome.

use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Generic/unknown error
    Unknown,
    /// Invalid argument provided
    InvalidArgument,
    /// Network error (connection refused, timeout, unreadable body)
    NetworkError,
    /// A credential could not be obtained
    AuthenticationFailed,
    /// Resource not found
    NotFound,
    /// Settings are missing or malformed
    Configuration,
    /// The platform answered with a non-zero envelope code
    ApiRejected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::AuthenticationFailed => "Authentication failed",
            ErrorCode::NotFound => "Not found",
            ErrorCode::Configuration => "Configuration error",
            ErrorCode::ApiRejected => "Request rejected by platform",
        }
    }
}

/// Internal error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Envelope `code` returned by the platform (always non-zero when set)
    pub(crate) api_code: Option<i64>,
    /// Platform log ID from the `x-tt-logid` response header, for support tickets
    pub(crate) log_id: Option<String>,
    /// HTTP status code if this error came from an HTTP response
    pub(crate) http_status: Option<u16>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            api_code: None,
            log_id: None,
            http_status: None,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::Configuration, msg)
    }

    /// A non-zero envelope code together with the platform's `msg`
    pub fn rejected(api_code: i64, msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::ApiRejected, msg).with_api_code(api_code)
    }

    /// Add the platform envelope code (builder pattern)
    pub fn with_api_code(mut self, code: i64) -> Self {
        self.api_code = Some(code);
        self
    }

    /// Add the platform log ID for debugging (builder pattern)
    pub fn with_log_id(mut self, id: String) -> Self {
        self.log_id = Some(id);
        self
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Get the platform envelope code if available
    pub fn api_code(&self) -> Option<i64> {
        self.api_code
    }

    /// Get the platform log ID if available
    pub fn log_id(&self) -> Option<&str> {
        self.log_id.as_deref()
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)?;
        if let Some(code) = self.api_code {
            write!(f, " (code {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Error::configuration(err.to_string())
    }
}
