use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Message shown when a ticker fails the format check.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid ticker symbol (letters only)";
/// Message shown when the backend answers 404.
pub const NOT_FOUND_MESSAGE: &str = "Invalid ticker symbol or data unavailable";
/// Message shown for every other non-success status.
pub const REQUEST_FAILED_MESSAGE: &str = "Error fetching data";

/// Validation and contract errors exposed by `whyticker-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp is not RFC3339 or 'YYYY-MM-DD HH:MM:SS': '{value}'")]
    InvalidTimestamp { value: String },

    #[error("historical series has {timestamps} timestamps but {prices} prices")]
    SeriesLengthMismatch { timestamps: usize, prices: usize },

    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be a positive number of milliseconds: '{value}'")]
    InvalidTimeout { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed analysis payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure category of an analysis submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisErrorKind {
    /// Ticker failed the format check and never left the client.
    InvalidInput,
    /// Backend answered 404.
    NotFound,
    /// Any other non-success status, transport failure or malformed body.
    RequestFailed,
}

impl AnalysisErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::RequestFailed => "request_failed",
        }
    }
}

impl Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of one submission, carrying the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    kind: AnalysisErrorKind,
    message: String,
    status: Option<u16>,
}

impl AnalysisError {
    pub fn invalid_input(source: &ValidationError) -> Self {
        tracing::debug!(reason = %source, "ticker rejected before request");
        Self {
            kind: AnalysisErrorKind::InvalidInput,
            message: String::from(INVALID_INPUT_MESSAGE),
            status: None,
        }
    }

    /// Maps a non-success HTTP status onto one of the two generic messages.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self {
                kind: AnalysisErrorKind::NotFound,
                message: String::from(NOT_FOUND_MESSAGE),
                status: Some(status),
            }
        } else {
            Self {
                kind: AnalysisErrorKind::RequestFailed,
                message: String::from(REQUEST_FAILED_MESSAGE),
                status: Some(status),
            }
        }
    }

    /// Transport failures and unreadable bodies keep their own message.
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            kind: AnalysisErrorKind::RequestFailed,
            message: message.into(),
            status: None,
        }
    }

    pub const fn kind(&self) -> AnalysisErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AnalysisError {}

impl From<ValidationError> for AnalysisError {
    fn from(value: ValidationError) -> Self {
        Self::invalid_input(&value)
    }
}
