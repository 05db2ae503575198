//! Section and token scanning over INF documents
//!
//! Provides the lookup engine: rewind-and-scan section location, then a
//! line-by-line search for the N-th `Key = Value` occurrence inside that
//! section. Lines that do not parse as entries are tolerated and
//! skipped; a line opening the next section ends the search. The loop
//! is an explicit state machine so the priority ordering of the final
//! error classification stays visible: a failed read outranks malformed
//! content, which outranks plain absence.
//!
//! # Example
//!
//! ```rust
//! use inf_core::{InfScanner, MemorySource, ScanError};
//!
//! let document = "\
//! [Sources]
//! File = core.c
//! File = init.c
//!
//! [Binaries]
//! File = blob.bin
//! ";
//!
//! let mut scanner = InfScanner::new(MemorySource::new(document));
//! assert_eq!(scanner.find_token("Sources", "File", 1)?, "init.c");
//! assert!(scanner
//!     .find_token("Sources", "File", 2)
//!     .is_err_and(|error| error.is_not_found()));
//! # Ok::<(), ScanError>(())
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::convert::{self, Guid};
use crate::diagnostics::Diagnostic;
use crate::source::{LineBuf, LineSource};
use crate::Result;

pub mod errors;

pub use errors::ScanError;

/// Token-lookup scan states. One transition per line read; terminal
/// states map onto the final error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Inside the requested section, still looking for the key.
    Scanning,
    /// Hit the next `[` header; the section body has ended.
    SectionEnded,
    /// The underlying read failed mid-scan.
    ReadError,
    /// The key matched but its value slot is empty.
    ParseError,
}

/// Per-line decision of the token-lookup state machine.
enum LineKind<'l> {
    /// Blank line, comment residue, or no usable entry shape.
    Skip,
    /// The line opens the next section.
    NextSection,
    /// The key matched; payload is the whitespace-stripped value text.
    Match(&'l str),
}

/// Classify one line against the searched key.
///
/// The left side of the first `=` supplies the candidate token (its
/// first whitespace-delimited word); a line whose first word opens a
/// `[` header ends the section even without a delimiter.
fn classify_line<'l>(line: &'l str, token: &str) -> LineKind<'l> {
    let (left, value) = match line.split_once('=') {
        Some((left, value)) => (left, Some(value)),
        None => (line, None),
    };
    let Some(first) = left.split_whitespace().next() else {
        return LineKind::Skip;
    };
    if first.starts_with('[') {
        return LineKind::NextSection;
    }
    let Some(value) = value else {
        return LineKind::Skip;
    };
    if first == token {
        LineKind::Match(value.trim_matches([' ', '\t']))
    } else {
        LineKind::Skip
    }
}

/// Scanner over one document source.
///
/// Owns the source's cursor and a reusable bounded line buffer, so one
/// scanner serves one parse task at a time; every lookup restarts from
/// the document top. Conversion failures from the typed lookups are
/// collected as diagnostics and kept for inspection via
/// [`issues`](Self::issues).
#[derive(Debug)]
pub struct InfScanner<S> {
    source: S,
    line: LineBuf,
    issues: Vec<Diagnostic>,
}

impl<S: LineSource> InfScanner<S> {
    /// Create a scanner over `source` with a default-capacity line
    /// buffer.
    pub fn new(source: S) -> Self {
        Self::with_line_buf(source, LineBuf::new())
    }

    /// Create a scanner with a caller-sized line buffer.
    pub fn with_line_buf(source: S, line: LineBuf) -> Self {
        Self {
            source,
            line,
            issues: Vec::new(),
        }
    }

    /// Diagnostics collected by typed lookups so far.
    #[must_use]
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Drop the collected diagnostics.
    pub fn clear_issues(&mut self) {
        self.issues.clear();
    }

    /// Give back the wrapped source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Scan from the document start for a line containing `section` as
    /// a case-sensitive substring.
    ///
    /// Always rewinds first, so any in-progress scan position is lost.
    /// Returns `false` when the end of the document is reached without
    /// a match, or when the source fails to rewind or read.
    pub fn find_section(&mut self, section: &str) -> bool {
        if self.source.rewind().is_err() {
            return false;
        }
        loop {
            match self.source.next_line(&mut self.line) {
                Ok(true) => {
                    if self.line.as_str().contains(section) {
                        return true;
                    }
                }
                Ok(false) | Err(_) => return false,
            }
        }
    }

    /// Find the value of the `occurrence`-th repetition of `token`
    /// within `section` (zero-based).
    ///
    /// The value is everything after the `=`, stripped of leading and
    /// trailing spaces and tabs. Lines that do not parse as entries are
    /// skipped; the search ends at the next section header.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidParameter`] when `section` or `token` is
    ///   empty, before anything is read
    /// - [`ScanError::Load`] when a read fails mid-scan
    /// - [`ScanError::Aborted`] when the key matched but its value is
    ///   empty
    /// - [`ScanError::NotFound`] when the section, the token, or the
    ///   requested occurrence is absent
    pub fn find_token(&mut self, section: &str, token: &str, occurrence: usize) -> Result<String> {
        if section.is_empty() {
            return Err(ScanError::invalid_parameter("section name must not be empty"));
        }
        if token.is_empty() {
            return Err(ScanError::invalid_parameter("token name must not be empty"));
        }

        let mut state = ScanState::Scanning;
        let mut matched = 0_usize;

        if self.find_section(section) {
            loop {
                match self.source.next_line(&mut self.line) {
                    // Exit unconditionally: the buffer holds stale
                    // content after a failed read.
                    Err(_) => {
                        state = ScanState::ReadError;
                        break;
                    }
                    Ok(false) => break,
                    Ok(true) => {}
                }
                match classify_line(self.line.as_str(), token) {
                    LineKind::Skip => {}
                    LineKind::NextSection => {
                        state = ScanState::SectionEnded;
                        break;
                    }
                    LineKind::Match(value) => {
                        if matched == occurrence {
                            if value.is_empty() {
                                state = ScanState::ParseError;
                                break;
                            }
                            return Ok(value.to_string());
                        }
                        matched += 1;
                    }
                }
            }
        }

        match state {
            ScanState::ReadError => Err(ScanError::load(
                "document read failed during token scan",
            )),
            ScanState::ParseError => Err(ScanError::aborted(format!(
                "token '{token}' in section '{section}' has an empty value"
            ))),
            ScanState::Scanning | ScanState::SectionEnded => {
                Err(ScanError::not_found(section, Some(token)))
            }
        }
    }

    /// Look up `token` and convert its value to a [`Guid`].
    ///
    /// Conversion failures are reported to this scanner's diagnostics
    /// before the error returns, carrying the offending value text.
    ///
    /// # Errors
    ///
    /// Everything [`find_token`](Self::find_token) returns, plus
    /// [`ScanError::Aborted`] when the value is not a canonical GUID.
    pub fn find_guid(&mut self, section: &str, token: &str, occurrence: usize) -> Result<Guid> {
        let value = self.find_token(section, token, occurrence)?;
        convert::parse_guid_with(&value, &mut self.issues)
    }

    /// Look up `token` and convert its value to a `u64`.
    ///
    /// `force_hex` carries through to [`convert::parse_u64`]; a `0x`
    /// prefix on the value selects hex mode either way.
    ///
    /// # Errors
    ///
    /// Everything [`find_token`](Self::find_token) returns, plus the
    /// conversion errors of [`convert::parse_u64`].
    pub fn find_u64(
        &mut self,
        section: &str,
        token: &str,
        occurrence: usize,
        force_hex: bool,
    ) -> Result<u64> {
        let value = self.find_token(section, token, occurrence)?;
        convert::parse_u64(&value, force_hex)
    }
}
