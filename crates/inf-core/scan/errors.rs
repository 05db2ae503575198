//! Scan error types
//!
//! One discriminant per outcome callers dispatch on, rather than a
//! panic or a catch-all. `NotFound` is routinely acceptable (optional
//! keys); `Load` and `Aborted` usually stop the caller's build step.
//! Nothing here retries: a failed lookup is final, and retry policy
//! belongs to whatever sits above the scanner.

use alloc::format;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Primary error type for scanning and conversion operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A required argument was missing or empty, detected before any read.
    InvalidParameter {
        /// Which precondition failed.
        reason: String,
    },

    /// The underlying read failed mid-scan. Fatal to this lookup.
    Load {
        /// Description of the underlying failure.
        message: String,
    },

    /// Document content violates the expected shape.
    Aborted {
        /// What was malformed, with the offending text where useful.
        message: String,
    },

    /// Well-formed document, but the requested item is absent.
    NotFound {
        /// Section that was searched.
        section: String,
        /// Token that was searched within the section, if the lookup
        /// got that far.
        token: Option<String>,
    },
}

impl ScanError {
    /// Invalid-parameter error with a reason.
    pub fn invalid_parameter<T: fmt::Display>(reason: T) -> Self {
        Self::InvalidParameter {
            reason: format!("{reason}"),
        }
    }

    /// Load error wrapping the underlying failure.
    pub fn load<T: fmt::Display>(message: T) -> Self {
        Self::Load {
            message: format!("{message}"),
        }
    }

    /// Malformed-content error.
    pub fn aborted<T: fmt::Display>(message: T) -> Self {
        Self::Aborted {
            message: format!("{message}"),
        }
    }

    /// Absence of `section`, or of `token` within it, in a well-formed
    /// document.
    #[must_use]
    pub fn not_found(section: &str, token: Option<&str>) -> Self {
        Self::NotFound {
            section: String::from(section),
            token: token.map(String::from),
        }
    }

    /// True for plain absence, the one kind callers routinely tolerate.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the document itself is malformed.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    /// True when the failure came from the underlying medium.
    #[must_use]
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// True when a precondition failed before any read happened.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
            Self::Load { message } => write!(f, "read failed: {message}"),
            Self::Aborted { message } => write!(f, "malformed content: {message}"),
            Self::NotFound {
                section,
                token: Some(token),
            } => write!(f, "token '{token}' not found in section '{section}'"),
            Self::NotFound {
                section,
                token: None,
            } => write!(f, "section '{section}' not found"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for ScanError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn predicates_match_their_variants() {
        assert!(ScanError::not_found("A", None).is_not_found());
        assert!(ScanError::aborted("bad").is_aborted());
        assert!(ScanError::load("eof").is_load());
        assert!(ScanError::invalid_parameter("empty").is_invalid_parameter());
        assert!(!ScanError::aborted("bad").is_not_found());
    }

    #[test]
    fn not_found_display_names_what_was_searched() {
        assert_eq!(
            ScanError::not_found("Defines", Some("FV_GUID")).to_string(),
            "token 'FV_GUID' not found in section 'Defines'"
        );
        assert_eq!(
            ScanError::not_found("Defines", None).to_string(),
            "section 'Defines' not found"
        );
    }
}
