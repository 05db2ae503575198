//! # INF-RS Core
//!
//! Scanner for INF-style configuration text: bracketed sections
//! (`[SectionName]`) containing `Key = Value` lines. The crate extracts
//! section bodies, instance-indexed key occurrences, and typed values
//! (registry-format GUIDs, unsigned 64-bit integers) from documents held
//! in memory or read from a seekable stream.
//!
//! ## Features
//!
//! - **Zero-copy document views**: [`MemorySource`] scans a borrowed `&str`
//!   by byte offset, never owning or reallocating the document
//! - **Bounded line reading**: lines land in a fixed-capacity [`LineBuf`];
//!   overlong lines truncate instead of growing
//! - **Instance-indexed lookup**: repeated keys within one section are
//!   addressed by a zero-based occurrence index
//! - **Strict typed converters**: canonical 36-character GUIDs and
//!   decimal/hex integers with wrapping accumulation
//! - **Collected diagnostics**: conversion failures are reported through a
//!   sink and retained on the scanner for later inspection
//!
//! ## Quick Start
//!
//! ```rust
//! use inf_core::{InfScanner, MemorySource};
//!
//! let document = r"
//! [Defines]
//! FV_BASE_ADDRESS = 0xFFF00000 // flash base
//! FV_GUID = 8c8ce578-8a3d-4f1c-9935-896185c32dd3
//! ";
//!
//! let mut scanner = InfScanner::new(MemorySource::new(document));
//! let base = scanner.find_u64("Defines", "FV_BASE_ADDRESS", 0, false)?;
//! assert_eq!(base, 0xFFF0_0000);
//!
//! let guid = scanner.find_guid("Defines", "FV_GUID", 0)?;
//! assert_eq!(guid.data1, 0x8c8c_e578);
//! # Ok::<(), inf_core::ScanError>(())
//! ```
//!
//! ## Scope
//!
//! This is not a general-purpose INI/TOML parser. There are no nested
//! sections, multi-line values, quoted strings with embedded delimiters,
//! or escape sequences, and no document-wide validation: each lookup
//! tolerates or rejects individual line shapes as it scans past them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod convert;
pub mod diagnostics;
pub mod scan;
pub mod source;

pub use convert::{parse_guid, parse_guid_with, parse_u64, Guid};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, DiagnosticSink};
pub use scan::{InfScanner, ScanError};
pub use source::{CommentStyle, LineBuf, LineSource, MemorySource};

#[cfg(feature = "stream")]
pub use source::StreamSource;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result alias used across the crate, defaulting to [`ScanError`]
pub type Result<T, E = ScanError> = core::result::Result<T, E>;
