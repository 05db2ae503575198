//! Diagnostic reporting for conversion and format violations
//!
//! Converters that reject document content emit a [`Diagnostic`] carrying
//! the offending text through a [`DiagnosticSink`] before returning their
//! error. The scanner collects its own diagnostics into a `Vec`, which
//! implements the sink trait directly; callers wanting different routing
//! (stderr, a logger, a counter) implement the trait themselves.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric diagnostic codes emitted by this crate.
///
/// The code space follows the build-tool convention INF documents come
/// from: the 1xxx block covers option and value problems.
pub mod codes {
    /// A value did not match the format its key requires.
    pub const INVALID_OPTION_VALUE: u32 = 1003;
}

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticSeverity {
    /// Information that may be useful but does not affect the result.
    Info,
    /// Potential problem; the operation still produced a result.
    Warning,
    /// The operation failed and returned an error alongside this report.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single reported problem, retaining the offending document text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Severity level of this report.
    pub severity: DiagnosticSeverity,
    /// Numeric code from [`codes`].
    pub code: u32,
    /// Human-readable message.
    pub message: String,
    /// The document text that triggered the report, verbatim.
    pub offending: String,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(code: u32, message: impl Into<String>, offending: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            code,
            message: message.into(),
            offending: offending.into(),
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(code: u32, message: impl Into<String>, offending: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code,
            message: message.into(),
            offending: offending.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}: \"{}\"",
            self.severity, self.code, self.message, self.offending
        )
    }
}

/// Sink receiving diagnostics as they are produced.
pub trait DiagnosticSink {
    /// Accept one diagnostic report.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::error(codes::INVALID_OPTION_VALUE, "bad", "x"));
        sink.report(Diagnostic::warning(codes::INVALID_OPTION_VALUE, "odd", "y"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, DiagnosticSeverity::Error);
        assert_eq!(sink[1].severity, DiagnosticSeverity::Warning);
        assert_eq!(sink[1].offending, "y");
    }

    #[test]
    fn display_includes_code_and_offending_text() {
        let diagnostic = Diagnostic::error(
            codes::INVALID_OPTION_VALUE,
            "invalid option value",
            "not-a-guid",
        );
        assert_eq!(
            diagnostic.to_string(),
            "error 1003: invalid option value: \"not-a-guid\""
        );
    }

    #[test]
    fn null_sink_discards() {
        let mut sink = NullSink;
        sink.report(Diagnostic::error(0, "dropped", ""));
    }
}
