//! Error code constants.
//!
//! Error codes are organized by category:
//! - 3xxx: Validation errors (caused by the submitted form)
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Validation Errors (3xxx) =====

    /// No character class was selected.
    pub const NO_CHARACTER_CLASS: Self = Self(3001);

    // ===== Internal/System Errors (5xxx) =====

    /// The secure random source failed.
    pub const RANDOM_SOURCE_UNAVAILABLE: Self = Self(5001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            3000..=3999 => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Validation errors (3xxx).
    Validation,
    /// Internal/system errors (5xxx).
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::NO_CHARACTER_CLASS.as_i32(), 3001);
        assert_eq!(ErrorCode::RANDOM_SOURCE_UNAVAILABLE.as_i32(), 5001);
        assert_eq!(i32::from(ErrorCode::NO_CHARACTER_CLASS), 3001);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ErrorCode::NO_CHARACTER_CLASS.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::RANDOM_SOURCE_UNAVAILABLE.category(),
            ErrorCategory::Internal
        );
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
