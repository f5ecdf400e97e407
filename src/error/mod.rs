//! Error handling module.
//!
//! This module provides unified error handling with HTTP status code mapping.
//! Errors are shown to the user inside the re-rendered page rather than as a
//! bare error body.

pub mod codes;

use axum::http::StatusCode;

pub use codes::{ErrorCategory, ErrorCode};

/// Message shown when the form is submitted with every class unchecked.
pub const NO_CHARACTER_CLASS_MESSAGE: &str = "Please select at least one character set";

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No character class was selected (user input error).
    #[error("Please select at least one character set")]
    NoCharacterClassSelected,

    /// The secure random source failed (system fault).
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NoCharacterClassSelected => ErrorCode::NO_CHARACTER_CLASS,
            Self::RandomSourceUnavailable(_) => ErrorCode::RANDOM_SOURCE_UNAVAILABLE,
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// A missing selection is an ordinary page state, so it keeps `200 OK`.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NoCharacterClassSelected => StatusCode::OK,
            Self::RandomSourceUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message rendered into the page.
    ///
    /// System faults get a fixed message; their details only go to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoCharacterClassSelected => NO_CHARACTER_CLASS_MESSAGE.to_string(),
            Self::RandomSourceUnavailable(_) => {
                "Password generation failed: secure random source unavailable".to_string()
            }
        }
    }

    /// Record this error at a level matching its category.
    pub fn log(&self) {
        let code = self.error_code();
        match code.category() {
            ErrorCategory::Validation => tracing::warn!(
                error_code = code.as_i32(),
                message = %self,
                "Request rejected"
            ),
            ErrorCategory::Internal => tracing::error!(
                error_code = code.as_i32(),
                status = %self.status_code(),
                message = %self,
                "Request failed"
            ),
        }
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::EmptyAlphabet => Self::NoCharacterClassSelected,
            GeneratorError::RandomSourceUnavailable(msg) => Self::RandomSourceUnavailable(msg),
        }
    }
}

/// Password generator error type.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The alphabet has no characters to draw from.
    #[error("Alphabet is empty")]
    EmptyAlphabet,

    /// The operating system entropy source failed.
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `GeneratorError`.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
