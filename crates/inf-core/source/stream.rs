//! Stream-backed document view
//!
//! Legacy view over an open, seekable handle. The end of the document is
//! detected per-read instead of being held as a byte offset, and `#`
//! comments are accepted in addition to `//` (the historical stream-tool
//! style). The asymmetry is carried as a [`CommentStyle`] flag so callers
//! that want the in-memory comment rules can opt out.

use std::io::{BufRead, Seek, SeekFrom};

use super::{CommentStyle, LineBuf, LineSource};
use crate::{Result, ScanError};

/// Document view over any seekable buffered reader.
///
/// The reader is handed over already open and positioned at the document
/// start; this view never opens or closes the underlying resource. Read
/// and seek failures surface as [`ScanError::Load`].
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: R,
    comment_style: CommentStyle,
    /// Raw line staging area, reused across reads.
    raw: String,
}

impl<R: BufRead + Seek> StreamSource<R> {
    /// Wrap an open reader positioned at the document start.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            comment_style: CommentStyle::SlashAndHash,
            raw: String::new(),
        }
    }

    /// Override the accepted comment style.
    #[must_use]
    pub fn with_comment_style(mut self, style: CommentStyle) -> Self {
        self.comment_style = style;
        self
    }

    /// Comment style this view strips at.
    #[must_use]
    pub const fn comment_style(&self) -> CommentStyle {
        self.comment_style
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead + Seek> LineSource for StreamSource<R> {
    fn rewind(&mut self) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(0))
            .map_err(ScanError::load)?;
        Ok(())
    }

    fn next_line(&mut self, buf: &mut LineBuf) -> Result<bool> {
        self.raw.clear();
        let read = self
            .reader
            .read_line(&mut self.raw)
            .map_err(ScanError::load)?;
        if read == 0 {
            return Ok(false);
        }
        let line = self.raw.strip_suffix('\n').unwrap_or(&self.raw);
        buf.fill(line);
        buf.strip_comment(self.comment_style);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_detects_end() {
        let mut source = StreamSource::new(Cursor::new("one\ntwo\r\nthree"));
        let mut buf = LineBuf::new();

        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "one");
        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "two");
        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "three");
        assert!(!source.next_line(&mut buf).unwrap());
    }

    #[test]
    fn hash_comments_are_stripped_by_default() {
        let mut source = StreamSource::new(Cursor::new("Key = 1 # note\nOther = 2 // note\n"));
        let mut buf = LineBuf::new();

        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "Key = 1 ");
        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "Other = 2 ");
    }

    #[test]
    fn slash_only_style_keeps_hash_text() {
        let mut source = StreamSource::new(Cursor::new("Key = a#b\n"))
            .with_comment_style(CommentStyle::SlashOnly);
        let mut buf = LineBuf::new();

        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "Key = a#b");
    }

    #[test]
    fn rewind_seeks_to_stream_start() {
        let mut source = StreamSource::new(Cursor::new("first\nsecond\n"));
        let mut buf = LineBuf::new();

        assert!(source.next_line(&mut buf).unwrap());
        assert!(source.next_line(&mut buf).unwrap());
        source.rewind().unwrap();
        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "first");
    }

    #[test]
    fn overlong_stream_line_truncates() {
        let mut source = StreamSource::new(Cursor::new("abcdefgh\n"));
        let mut buf = LineBuf::with_capacity(4);

        assert!(source.next_line(&mut buf).unwrap());
        assert_eq!(buf.as_str(), "abcd");
    }
}
