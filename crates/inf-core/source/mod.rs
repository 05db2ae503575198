//! Document views and bounded line reading
//!
//! A document is scanned through the [`LineSource`] capability trait:
//! read the next logical line, or rewind to the document start. Two
//! implementations cover the two ways INF text reaches a tool:
//! [`MemorySource`] addresses an in-memory buffer by byte offset, and
//! [`StreamSource`] wraps an open, seekable reader.
//!
//! Line reading is shared policy regardless of backing: the trailing
//! newline is stripped, a CRLF ending is canonicalized to the shorter
//! line, overlong lines truncate at the buffer capacity, and the first
//! in-line comment marker cuts the line short. The two backings accept
//! different comment styles: in-memory documents recognize `//` only,
//! stream documents also recognize `#` (see [`CommentStyle`]).
//!
//! # Example
//!
//! ```rust
//! use inf_core::{LineBuf, LineSource, MemorySource};
//!
//! let mut source = MemorySource::new("[Defines]\nKey = Value // note\n");
//! let mut line = LineBuf::new();
//!
//! assert!(source.next_line(&mut line)?);
//! assert_eq!(line.as_str(), "[Defines]");
//! assert!(source.next_line(&mut line)?);
//! assert_eq!(line.as_str(), "Key = Value ");
//! assert!(!source.next_line(&mut line)?);
//! # Ok::<(), inf_core::ScanError>(())
//! ```

use alloc::string::String;

use crate::Result;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "stream")]
pub use stream::StreamSource;

/// Default content capacity of a [`LineBuf`], in bytes.
pub const DEFAULT_LINE_CAPACITY: usize = 4096;

/// Comment styles accepted while reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` introduces a comment. The in-memory document style.
    SlashOnly,
    /// `//` or `#` introduces a comment. The legacy stream style.
    SlashAndHash,
}

/// Bounded, reusable buffer filled by [`LineSource::next_line`].
///
/// Capacity is fixed at construction. A source line longer than the
/// capacity is truncated into the buffer; the buffer never grows past
/// its capacity, no matter the document.
#[derive(Debug, Clone)]
pub struct LineBuf {
    text: String,
    capacity: usize,
}

impl LineBuf {
    /// Create a buffer with [`DEFAULT_LINE_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }

    /// Create a buffer bounded at `capacity` content bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Bytes this buffer holds before truncating a line.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current line content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the current line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content with `line`, truncating at capacity and
    /// dropping a trailing carriage return. Returns the number of bytes
    /// consumed from `line`, before the carriage-return adjustment, so
    /// callers can advance their cursor by exactly what was read.
    pub(crate) fn fill(&mut self, line: &str) -> usize {
        let mut cut = line.len().min(self.capacity);
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        self.text.clear();
        self.text.push_str(&line[..cut]);
        if self.text.ends_with('\r') {
            self.text.pop();
        }
        cut
    }

    /// Truncate the content at the first comment marker of `style`.
    pub(crate) fn strip_comment(&mut self, style: CommentStyle) {
        if let Some(position) = self.text.find("//") {
            self.text.truncate(position);
        }
        if style == CommentStyle::SlashAndHash {
            if let Some(position) = self.text.find('#') {
                self.text.truncate(position);
            }
        }
    }
}

impl Default for LineBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability view over a scannable document: a movable read cursor
/// bounded by the document end.
///
/// Implementations keep the cursor at or before the end boundary after
/// every operation, and only move it forward except during
/// [`rewind`](Self::rewind). A source is exclusively owned by whichever
/// scan is driving it; concurrent use must be serialized by the caller.
pub trait LineSource {
    /// Move the read cursor back to the document start.
    ///
    /// # Errors
    ///
    /// [`ScanError::Load`](crate::ScanError::Load) when the underlying
    /// medium cannot seek.
    fn rewind(&mut self) -> Result<()>;

    /// Read the next logical line into `buf`.
    ///
    /// Returns `Ok(false)` when the cursor is already at or past the end
    /// boundary, leaving `buf` untouched.
    ///
    /// # Errors
    ///
    /// [`ScanError::Load`](crate::ScanError::Load) when the underlying
    /// read fails mid-scan.
    fn next_line(&mut self, buf: &mut LineBuf) -> Result<bool>;
}

/// Byte-offset document view over a borrowed in-memory buffer.
///
/// The buffer is owned by the caller; only the cursor is mutated here.
/// A leading UTF-8 BOM is skipped, and [`rewind`](LineSource::rewind)
/// returns to the post-BOM start. Reads never fail.
#[derive(Debug, Clone)]
pub struct MemorySource<'a> {
    /// Full document text.
    source: &'a str,
    /// Byte offset of the first scannable character, after any BOM.
    start: usize,
    /// Current read position.
    cursor: usize,
}

impl<'a> MemorySource<'a> {
    /// Create a view over `source`, positioned at the document start.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let start = if source.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            source,
            start,
            cursor: start,
        }
    }

    /// Byte offset of the read cursor within the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Exclusive end boundary of the document.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.source.len()
    }
}

impl LineSource for MemorySource<'_> {
    fn rewind(&mut self) -> Result<()> {
        self.cursor = self.start;
        Ok(())
    }

    fn next_line(&mut self, buf: &mut LineBuf) -> Result<bool> {
        if self.cursor >= self.source.len() {
            return Ok(false);
        }
        let rest = &self.source[self.cursor..];
        let line = match rest.find('\n') {
            Some(position) => &rest[..position],
            None => rest,
        };
        let copied = buf.fill(line);
        // Skip the newline as well. A truncated line leaves its tail to
        // the next read; the cursor never passes the end boundary.
        self.cursor = (self.cursor + copied + 1).min(self.source.len());
        buf.strip_comment(CommentStyle::SlashOnly);
        Ok(true)
    }
}
