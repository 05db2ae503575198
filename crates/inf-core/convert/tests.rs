//! Converter coverage: canonical GUID validation and numeric parsing

use super::*;

use alloc::string::ToString;
use alloc::vec::Vec;

const CANONICAL: &str = "12345678-1234-1234-1234-123456789abc";

#[test]
fn canonical_guid_decodes_field_layout() {
    let guid = parse_guid(CANONICAL).unwrap();
    assert_eq!(guid.data1, 0x1234_5678);
    assert_eq!(guid.data2, 0x1234);
    assert_eq!(guid.data3, 0x1234);
    assert_eq!(guid.data4, [0x12, 0x34, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
}

#[test]
fn uppercase_hex_digits_are_accepted() {
    let guid = parse_guid("8C8CE578-8A3D-4F1C-9935-896185C32DD3").unwrap();
    assert_eq!(guid.data1, 0x8c8c_e578);
    assert_eq!(guid.data4[7], 0xd3);
}

#[test]
fn wrong_length_is_rejected() {
    assert!(parse_guid("").unwrap_err().is_aborted());
    assert!(parse_guid("12345678").unwrap_err().is_aborted());
    // One digit short, one digit long.
    assert!(parse_guid("12345678-1234-1234-1234-123456789ab")
        .unwrap_err()
        .is_aborted());
    assert!(parse_guid("12345678-1234-1234-1234-123456789abcd")
        .unwrap_err()
        .is_aborted());
}

#[test]
fn misplaced_separators_are_rejected() {
    assert!(parse_guid("123456781-234-1234-1234-123456789abc")
        .unwrap_err()
        .is_aborted());
    assert!(parse_guid("12345678_1234_1234_1234_123456789abc")
        .unwrap_err()
        .is_aborted());
}

#[test]
fn non_hex_characters_are_rejected() {
    assert!(parse_guid("1234567g-1234-1234-1234-123456789abc")
        .unwrap_err()
        .is_aborted());
    assert!(parse_guid("12345678-1234-1234-1234-123456789ab ")
        .unwrap_err()
        .is_aborted());
}

#[test]
fn display_emits_canonical_lowercase() {
    let guid = parse_guid("8C8CE578-8A3D-4F1C-9935-896185C32DD3").unwrap();
    assert_eq!(guid.to_string(), "8c8ce578-8a3d-4f1c-9935-896185c32dd3");
}

#[test]
fn from_str_round_trips_canonical_lowercase() {
    let guid: Guid = CANONICAL.parse().unwrap();
    assert_eq!(guid.to_string().parse::<Guid>().unwrap(), guid);
}

#[test]
fn nil_guid_is_all_zero() {
    assert_eq!(Guid::nil(), Guid::default());
    assert_eq!(Guid::nil().to_string(), "00000000-0000-0000-0000-000000000000");
}

#[test]
fn reporting_parse_emits_one_diagnostic_with_offending_text() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let error = parse_guid_with("not-a-guid", &mut sink).unwrap_err();
    assert!(error.is_aborted());
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].code, codes::INVALID_OPTION_VALUE);
    assert_eq!(sink[0].offending, "not-a-guid");
}

#[test]
fn reporting_parse_is_silent_on_success() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    assert!(parse_guid_with(CANONICAL, &mut sink).is_ok());
    assert!(sink.is_empty());
}

#[test]
fn decimal_and_hex_agree() {
    assert_eq!(parse_u64("0x1F", false).unwrap(), 31);
    assert_eq!(parse_u64("31", false).unwrap(), 31);
    assert_eq!(parse_u64("0x1F", true).unwrap(), 31);
    assert_eq!(parse_u64("1F", true).unwrap(), 31);
}

#[test]
fn prefix_overrides_forced_mode_both_ways() {
    // 0X prefix wins even when the caller asked for decimal.
    assert_eq!(parse_u64("0X10", false).unwrap(), 16);
    assert_eq!(parse_u64("0x10", true).unwrap(), 16);
}

#[test]
fn invalid_digits_abort() {
    assert!(parse_u64("1G", false).unwrap_err().is_aborted());
    assert!(parse_u64("12x", false).unwrap_err().is_aborted());
    assert!(parse_u64("0x1G", false).unwrap_err().is_aborted());
    // Tabs are not skipped the way spaces are.
    assert!(parse_u64("\t42", false).unwrap_err().is_aborted());
}

#[test]
fn leading_spaces_skip_and_first_space_stops() {
    assert_eq!(parse_u64("   42", false).unwrap(), 42);
    assert_eq!(parse_u64("42 junk that is ignored", false).unwrap(), 42);
    assert_eq!(parse_u64("0x1F 2", false).unwrap(), 31);
    assert_eq!(parse_u64("7 8", false).unwrap(), 7);
}

#[test]
fn empty_input_accumulates_to_zero() {
    assert_eq!(parse_u64("", false).unwrap(), 0);
    assert_eq!(parse_u64("0x", false).unwrap(), 0);
    assert_eq!(parse_u64("   ", false).unwrap(), 0);
}

#[test]
fn overflow_wraps_instead_of_failing() {
    // 2^64 in decimal wraps to zero under unchecked accumulation.
    assert_eq!(parse_u64("18446744073709551616", false).unwrap(), 0);
    assert_eq!(parse_u64("18446744073709551617", false).unwrap(), 1);
    // 17 hex digits shift the leading digit out.
    assert_eq!(parse_u64("0x10000000000000000", false).unwrap(), 0);
}

#[test]
fn over_length_input_is_an_argument_error() {
    let long = "1".repeat(256);
    assert!(parse_u64(&long, false).unwrap_err().is_invalid_parameter());
    let max = "1".repeat(255);
    assert!(parse_u64(&max, false).is_ok());
}

#[test]
fn u64_maximum_parses_exactly() {
    assert_eq!(
        parse_u64("18446744073709551615", false).unwrap(),
        u64::MAX
    );
    assert_eq!(parse_u64("0xFFFFFFFFFFFFFFFF", false).unwrap(), u64::MAX);
}
