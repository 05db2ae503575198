//! Typed value converters for INF token text
//!
//! Stateless leaves: callers feed them the value text a token lookup
//! returned. GUIDs are validated strictly against the canonical
//! 36-character form before any decoding; integers accept decimal or
//! `0x`-prefixed hexadecimal with wrapping accumulation, so a value
//! that exceeds 64 bits wraps instead of failing.
//!
//! # Example
//!
//! ```rust
//! use inf_core::convert::{parse_guid, parse_u64};
//!
//! let guid = parse_guid("12345678-1234-1234-1234-123456789abc")?;
//! assert_eq!(guid.data1, 0x1234_5678);
//!
//! assert_eq!(parse_u64("0x1F", false)?, 31);
//! assert_eq!(parse_u64("31", false)?, 31);
//! # Ok::<(), inf_core::ScanError>(())
//! ```

use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::diagnostics::{codes, Diagnostic, DiagnosticSink};
use crate::scan::ScanError;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Longest accepted numeric input, in bytes.
const MAX_NUMERIC_LEN: usize = 255;

/// Byte length of the canonical textual GUID form.
const GUID_TEXT_LEN: usize = 36;

/// Registry-format GUID with the fixed on-disk field layout.
///
/// One 32-bit field, two 16-bit fields and eight raw bytes, written
/// textually as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`. The numeric
/// fields hold the values as written; the byte array keeps the last
/// two textual groups in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guid {
    /// First group, 8 hex digits.
    pub data1: u32,
    /// Second group, 4 hex digits.
    pub data2: u16,
    /// Third group, 4 hex digits.
    pub data3: u16,
    /// Fourth and fifth groups, 4 + 12 hex digits.
    pub data4: [u8; 8],
}

impl Guid {
    /// Assemble a GUID from its four layout fields.
    #[must_use]
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// The all-zero GUID.
    #[must_use]
    pub const fn nil() -> Self {
        Self::new(0, 0, 0, [0; 8])
    }
}

impl fmt::Display for Guid {
    /// Canonical lowercase textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl FromStr for Guid {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        parse_guid(s)
    }
}

/// Shared rejection for every malformed GUID shape.
fn guid_error(text: &str) -> ScanError {
    ScanError::aborted(format!(
        "incorrect GUID \"{text}\", expected xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
    ))
}

/// True when `bytes` has hex digits everywhere except literal dashes at
/// the four separator positions.
fn guid_shape_ok(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().all(|(index, &byte)| match index {
        8 | 13 | 18 | 23 => byte == b'-',
        _ => byte.is_ascii_hexdigit(),
    })
}

/// Parse the canonical 36-character textual GUID form.
///
/// The shape is validated strictly before any decoding: hex digit
/// groups of 8-4-4-4-12 separated by `-` at positions 8, 13, 18
/// and 23, and nothing before or after. There is no partial parse.
///
/// # Errors
///
/// [`ScanError::Aborted`] on wrong length, a misplaced separator, or a
/// non-hex character.
///
/// # Example
///
/// ```rust
/// use inf_core::parse_guid;
///
/// let guid = parse_guid("8c8ce578-8a3d-4f1c-9935-896185c32dd3")?;
/// assert_eq!(guid.data2, 0x8a3d);
/// assert!(parse_guid("8c8ce578-8a3d-4f1c-9935").is_err());
/// # Ok::<(), inf_core::ScanError>(())
/// ```
pub fn parse_guid(text: &str) -> Result<Guid> {
    let bytes = text.as_bytes();
    if bytes.len() != GUID_TEXT_LEN || !guid_shape_ok(bytes) {
        return Err(guid_error(text));
    }

    let data1 = u32::from_str_radix(&text[0..8], 16).map_err(|_| guid_error(text))?;
    let data2 = u16::from_str_radix(&text[9..13], 16).map_err(|_| guid_error(text))?;
    let data3 = u16::from_str_radix(&text[14..18], 16).map_err(|_| guid_error(text))?;

    // Fourth group (two bytes), then fifth group (six bytes), kept in
    // textual order.
    let mut data4 = [0_u8; 8];
    let offsets = [19, 21, 24, 26, 28, 30, 32, 34];
    for (slot, offset) in data4.iter_mut().zip(offsets) {
        *slot = u8::from_str_radix(&text[offset..offset + 2], 16).map_err(|_| guid_error(text))?;
    }

    Ok(Guid::new(data1, data2, data3, data4))
}

/// Parse a GUID, reporting format violations to `sink` first.
///
/// The scanner's typed lookups route through this so malformed values
/// land in the collected diagnostics with the offending text. The
/// returned error is unchanged from [`parse_guid`].
///
/// # Errors
///
/// Same as [`parse_guid`].
pub fn parse_guid_with(text: &str, sink: &mut dyn DiagnosticSink) -> Result<Guid> {
    parse_guid(text).map_err(|error| {
        sink.report(Diagnostic::error(
            codes::INVALID_OPTION_VALUE,
            "invalid option value",
            text,
        ));
        error
    })
}

/// Convert ASCII decimal or hexadecimal text to a `u64`.
///
/// A `0x`/`0X` prefix selects hex mode and overrides `force_hex` in
/// either direction. Leading spaces (not tabs) are skipped, and
/// accumulation stops cleanly at the first space or the end of input;
/// content after that space is ignored. Accumulation wraps on 64-bit
/// overflow rather than failing.
///
/// # Errors
///
/// [`ScanError::InvalidParameter`] for input longer than 255 bytes;
/// [`ScanError::Aborted`] for any character that is neither a digit of
/// the active radix nor a terminating space.
///
/// # Example
///
/// ```rust
/// use inf_core::parse_u64;
///
/// assert_eq!(parse_u64("0x1F", false)?, 31);
/// assert_eq!(parse_u64("1F", true)?, 31);
/// assert_eq!(parse_u64("  42 trailing", false)?, 42);
/// assert!(parse_u64("1G", false).is_err());
/// # Ok::<(), inf_core::ScanError>(())
/// ```
pub fn parse_u64(text: &str, force_hex: bool) -> Result<u64> {
    if text.len() > MAX_NUMERIC_LEN {
        return Err(ScanError::invalid_parameter(
            "numeric text longer than 255 bytes",
        ));
    }

    let mut rest = text.trim_start_matches(' ');
    let mut hex = force_hex;
    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        hex = true;
        rest = stripped;
    }
    let radix: u32 = if hex { 16 } else { 10 };

    let mut value = 0_u64;
    for byte in rest.bytes() {
        if byte == b' ' {
            break;
        }
        let Some(digit) = char::from(byte).to_digit(radix) else {
            return Err(ScanError::aborted(format!("invalid numeric text \"{text}\"")));
        };
        value = value
            .wrapping_mul(u64::from(radix))
            .wrapping_add(u64::from(digit));
    }
    Ok(value)
}
