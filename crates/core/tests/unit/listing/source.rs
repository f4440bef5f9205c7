//! Word Parsing Tests.

use mipsdis_core::DisasmError;
use mipsdis_core::listing::parse_word;
use mipsdis_core::listing::source::is_blank;

#[test]
fn parses_msb_first() {
    let word = parse_word("10000000000000000000000000000001", 1).unwrap();
    assert_eq!(word, 0x8000_0001);
}

#[test]
fn trims_surrounding_whitespace() {
    let word = parse_word("  00000000001000100001100000100000\r\t", 1).unwrap();
    assert_eq!(word, 0x0022_1820);
}

#[test]
fn rejects_short_line() {
    let err = parse_word("0101", 4).unwrap_err();
    assert!(matches!(err, DisasmError::InvalidLength { line: 4, len: 4 }));
}

#[test]
fn rejects_long_line() {
    let err = parse_word(&"0".repeat(33), 2).unwrap_err();
    assert!(matches!(err, DisasmError::InvalidLength { line: 2, len: 33 }));
}

#[test]
fn rejects_non_binary_digit() {
    let line = format!("{}2{}", "0".repeat(30), "0");
    let err = parse_word(&line, 9).unwrap_err();
    assert!(matches!(
        err,
        DisasmError::InvalidDigit {
            line: 9,
            column: 31,
            found: '2'
        }
    ));
}

#[test]
fn blank_detection() {
    assert!(is_blank(""));
    assert!(is_blank("  \t"));
    assert!(!is_blank(" 0"));
}
