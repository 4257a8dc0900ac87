//! Property-based tests for the dotted formatter.
//!
//! These tests use proptest to check, over arbitrary inputs:
//! 1. Integer output has one in-range component per byte of width
//! 2. Signed integers format exactly like their unsigned reinterpretation
//! 3. Sequences render one component per element, in order

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::LinkedList;

use ipfmt::format_ip;
use proptest::prelude::*;

/// Split dotted output and parse every component as an octet.
fn octets_of(text: &str) -> Vec<u8> {
    text.split('.')
        .map(|part| part.parse::<u8>().expect("component is an octet"))
        .collect()
}

proptest! {
    #[test]
    fn i8_is_its_unsigned_value(v in any::<i8>()) {
        prop_assert_eq!(format_ip(&v).unwrap(), (v as u8).to_string());
    }

    #[test]
    fn i16_has_two_octets(v in any::<i16>()) {
        let text = format_ip(&v).unwrap();
        prop_assert_eq!(octets_of(&text), (v as u16).to_be_bytes().to_vec());
    }

    #[test]
    fn i32_has_four_octets(v in any::<i32>()) {
        let text = format_ip(&v).unwrap();
        prop_assert_eq!(octets_of(&text), v.to_be_bytes().to_vec());
    }

    #[test]
    fn i64_has_eight_octets(v in any::<i64>()) {
        let text = format_ip(&v).unwrap();
        prop_assert_eq!(octets_of(&text), v.to_be_bytes().to_vec());
    }

    #[test]
    fn signed_matches_unsigned_reinterpretation(v in any::<i64>()) {
        prop_assert_eq!(format_ip(&v).unwrap(), format_ip(&(v as u64)).unwrap());
        prop_assert_eq!(
            format_ip(&(v as i32)).unwrap(),
            format_ip(&(v as i32 as u32)).unwrap()
        );
    }

    #[test]
    fn u32_matches_ipv4_display(v in any::<u32>()) {
        let addr = std::net::Ipv4Addr::from(v);
        prop_assert_eq!(format_ip(&v).unwrap(), addr.to_string());
    }

    #[test]
    fn sequence_renders_each_element(items in prop::collection::vec(any::<i32>(), 1..16)) {
        let expected = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        prop_assert_eq!(format_ip(&items).unwrap(), expected);
    }

    #[test]
    fn list_matches_vec(items in prop::collection::vec(any::<i16>(), 1..16)) {
        let list: LinkedList<i16> = items.iter().copied().collect();
        prop_assert_eq!(format_ip(&list).unwrap(), format_ip(&items).unwrap());
    }

    #[test]
    fn strings_pass_through(text in ".*") {
        prop_assert_eq!(format_ip(text.as_str()).unwrap(), text);
    }
}
