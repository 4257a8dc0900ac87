//! End-to-end formatting tests.
//!
//! Each case goes through the public entry points only, covering every shape
//! the formatter accepts and the documented reference outputs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};

use ipfmt::{format_ip, format_ip_with, print_ip, FormatConfig, FormatError, PrintError, Shape};
use pretty_assertions::assert_eq;

fn ok(value: &str) -> Result<String, FormatError> {
    Ok(value.to_string())
}

// -- Integers --

#[test]
fn signed_byte() {
    assert_eq!(format_ip(&-1i8), ok("255"));
    assert_eq!(format_ip(&i8::MIN), ok("128"));
    assert_eq!(format_ip(&i8::MAX), ok("127"));
}

#[test]
fn signed_short() {
    assert_eq!(format_ip(&0i16), ok("0.0"));
    assert_eq!(format_ip(&-1i16), ok("255.255"));
}

#[test]
fn signed_int() {
    assert_eq!(format_ip(&2_130_706_433i32), ok("127.0.0.1"));
    assert_eq!(format_ip(&i32::MIN), ok("128.0.0.0"));
}

#[test]
fn signed_long() {
    assert_eq!(
        format_ip(&8_875_824_491_850_138_409i64),
        ok("123.45.67.89.101.112.131.41")
    );
    assert_eq!(format_ip(&-1i64), ok("255.255.255.255.255.255.255.255"));
}

#[test]
fn unsigned_integers() {
    assert_eq!(format_ip(&200u8), ok("200"));
    assert_eq!(format_ip(&0xC0A8u16), ok("192.168"));
    assert_eq!(format_ip(&0xC0A8_0001u32), ok("192.168.0.1"));
    assert_eq!(format_ip(&1u64), ok("0.0.0.0.0.0.0.1"));
}

// -- Text --

#[test]
fn strings_are_identity() {
    assert_eq!(format_ip("Hello, World!"), ok("Hello, World!"));
    assert_eq!(format_ip(&String::from("Hello, World!")), ok("Hello, World!"));
    assert_eq!(format_ip(&Cow::Borrowed("10.0.0.1")), ok("10.0.0.1"));
    assert_eq!(format_ip(""), ok(""));
}

// -- Sequences --

#[test]
fn vector_of_ints() {
    assert_eq!(format_ip(&vec![100, 200, 300, 400]), ok("100.200.300.400"));
}

#[test]
fn list_of_shorts() {
    let list: LinkedList<i16> = [400, 300, 200, 100].into_iter().collect();
    assert_eq!(format_ip(&list), ok("400.300.200.100"));
}

#[test]
fn deque_slice_and_array() {
    let deque: VecDeque<u32> = [1, 2].into_iter().collect();
    assert_eq!(format_ip(&deque), ok("1.2"));
    assert_eq!(format_ip(&[3, 4, 5][..]), ok("3.4.5"));
    assert_eq!(format_ip(&[6u8; 2]), ok("6.6"));
}

#[test]
fn single_element_sequence_has_no_separator() {
    assert_eq!(format_ip(&vec![42]), ok("42"));
}

#[test]
fn empty_sequences_are_rejected() {
    let expected = Err(FormatError::EmptyInput {
        shape: Shape::Sequence,
    });
    assert_eq!(format_ip(&Vec::<i32>::new()), expected);
    assert_eq!(format_ip(&LinkedList::<i16>::new()), expected);
    assert_eq!(format_ip(&VecDeque::<u8>::new()), expected);
    let empty: [i64; 0] = [];
    assert_eq!(format_ip(&empty), expected);
}

#[test]
fn empty_error_message() {
    let err = format_ip(&Vec::<i32>::new()).unwrap_err();
    assert!(matches!(err, FormatError::EmptyInput { .. }));
    assert_eq!(err.to_string(), "cannot format an empty sequence");
}

// -- Tuples --

#[test]
fn homogeneous_tuple() {
    assert_eq!(format_ip(&(123, 456, 789, 0)), ok("123.456.789.0"));
}

#[test]
fn tuple_of_strings() {
    assert_eq!(format_ip(&("a", "b", "c")), ok("a.b.c"));
}

#[test]
fn single_element_tuple() {
    assert_eq!(format_ip(&(9u8,)), ok("9"));
}

// -- Configuration and printing --

#[test]
fn separator_is_configurable() {
    let config = FormatConfig::with_separator(':');
    assert_eq!(format_ip_with(&(1, 2), &config), ok("1:2"));
}

#[test]
fn print_ip_writes_one_line_per_call() {
    let mut out = Vec::new();
    print_ip(&-1i8, &mut out).unwrap();
    print_ip(&0i16, &mut out).unwrap();
    print_ip("Hello, World!", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "255\n0.0\nHello, World!\n");
}

#[test]
fn print_ip_reports_empty_input() {
    let mut out = Vec::new();
    let err = print_ip(&Vec::<i32>::new(), &mut out).unwrap_err();
    assert!(matches!(err, PrintError::Format(_)));
    assert_eq!(err.to_string(), "cannot format an empty sequence");
}
