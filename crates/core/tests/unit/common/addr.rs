//! # Listing Address Tests

use mipsdis_core::common::InstAddr;

#[test]
fn advance_adds_stride() {
    let addr = InstAddr::new(496).advance(4);
    assert_eq!(addr.val(), 500);
}

#[test]
fn advance_saturates() {
    let addr = InstAddr::new(u64::MAX - 1).advance(4);
    assert_eq!(addr, InstAddr(u64::MAX));
}

#[test]
fn display_is_decimal() {
    assert_eq!(InstAddr::new(696).to_string(), "696");
}

#[test]
fn ordering_follows_value() {
    assert!(InstAddr::new(496) < InstAddr::new(500));
}
