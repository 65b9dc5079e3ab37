//! Parsing and formatting

use std::str::FromStr;

use crate::common::*;
use num_bigint::BigInt;
use rust_decimal::Decimal;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn integer_parsing_styles() {
    assert_eq!(polynum::parse::<i32>("-128", Some(NumberStyles::INTEGER)).unwrap(), -128);
    assert_eq!(polynum::parse::<i32>("  +42  ", None).unwrap(), 42);
    assert_kind(polynum::parse::<i32>("1,000", None), ErrorKind::Format);
    assert_eq!(polynum::parse::<i32>("1,000", Some(NumberStyles::NUMBER)).unwrap(), 1000);
    assert_eq!(polynum::parse::<i32>("(15)", Some(NumberStyles::ANY)).unwrap(), -15);
    assert_eq!(
        polynum::parse::<i64>("12-", Some(NumberStyles::INTEGER | NumberStyles::ALLOW_TRAILING_SIGN))
            .unwrap(),
        -12
    );
    assert_eq!(polynum::parse::<u32>("7.000", Some(NumberStyles::NUMBER)).unwrap(), 7);
    assert_kind(polynum::parse::<u32>("7.5", Some(NumberStyles::NUMBER)), ErrorKind::Overflow);
    assert_eq!(polynum::parse::<i32>("1e3", Some(NumberStyles::FLOAT)).unwrap(), 1000);
}

#[test]
fn integer_range_failures() {
    assert_kind(polynum::parse::<i8>("256", None), ErrorKind::Overflow);
    assert_kind(polynum::parse::<i8>("-129", None), ErrorKind::Overflow);
    assert_kind(polynum::parse::<u8>("-1", None), ErrorKind::Overflow);
    assert_eq!(polynum::parse::<u8>("-0", None).unwrap(), 0);
    assert_eq!(
        polynum::parse::<i128>("-170141183460469231731687303715884105728", None).unwrap(),
        i128::MIN
    );
    assert_eq!(
        polynum::parse::<u128>("340282366920938463463374607431768211455", None).unwrap(),
        u128::MAX
    );
}

#[test]
fn hex_is_a_twos_complement_bit_pattern() {
    let hex = Some(NumberStyles::HEX_NUMBER);
    assert_eq!(polynum::parse::<u8>(" FF ", hex).unwrap(), 255);
    assert_eq!(polynum::parse::<i8>(" FF ", hex).unwrap(), -1);
    assert_eq!(polynum::parse::<i16>("8000", hex).unwrap(), i16::MIN);
    assert_eq!(polynum::parse::<u64>("ffffffffffffffff", hex).unwrap(), u64::MAX);
    assert_kind(polynum::parse::<u8>("1FF", hex), ErrorKind::Overflow);
    assert_kind(polynum::parse::<u8>("0x1F", hex), ErrorKind::Format);
    assert_eq!(polynum::parse::<BigInt>("FF", hex).unwrap(), BigInt::from(-1));
    assert_eq!(polynum::parse::<BigInt>("0FF", hex).unwrap(), BigInt::from(255));
}

#[test]
fn invalid_style_combinations() {
    let mixed = Some(NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_LEADING_SIGN);
    assert_kind(polynum::parse::<i32>("F", mixed), ErrorKind::InvalidArgument);
    assert_kind(
        polynum::parse::<f64>("F", Some(NumberStyles::HEX_NUMBER)),
        ErrorKind::InvalidArgument,
    );
    assert_kind(
        polynum::parse::<Decimal>("F", Some(NumberStyles::HEX_NUMBER)),
        ErrorKind::InvalidArgument,
    );
}

#[test]
fn float_parsing() {
    assert_eq!(polynum::parse::<f64>("1,234.5", None).unwrap(), 1234.5);
    assert_eq!(polynum::parse::<f64>("-2.5e-3", None).unwrap(), -0.0025);
    assert!(polynum::parse::<f64>("NaN", None).unwrap().is_nan());
    assert_eq!(polynum::parse::<f32>("-Infinity", None).unwrap(), f32::NEG_INFINITY);
    assert_eq!(polynum::parse::<f32>("1e39", None).unwrap(), f32::INFINITY);
    assert_kind(polynum::parse::<f64>("1.2.3", None), ErrorKind::Format);
    assert_eq!(polynum::try_parse::<f64>("", None), None);
}

#[test]
fn decimal_and_bigint_parsing() {
    assert_eq!(
        polynum::parse::<Decimal>("-79,228.125", None).unwrap(),
        Decimal::from_str("-79228.125").unwrap()
    );
    let big = "123456789012345678901234567890123456789";
    assert_eq!(
        polynum::parse::<BigInt>(big, None).unwrap(),
        BigInt::from_str(big).unwrap()
    );
    assert_kind(polynum::parse::<BigInt>("1.5", Some(NumberStyles::NUMBER)), ErrorKind::Overflow);
}

#[test]
fn try_parse_never_fails() {
    assert_eq!(polynum::try_parse::<i32>("a", None), None);
    assert_eq!(polynum::try_parse::<i8>("300", None), None);
    assert_eq!(polynum::try_parse::<u16>("65535", None), Some(65535));
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn integer_formats() {
    assert_eq!(polynum::to_string(-1234567i32, None).unwrap(), "-1234567");
    assert_eq!(polynum::to_string(-1234567i32, Some("N")).unwrap(), "-1,234,567.00");
    assert_eq!(polynum::to_string(42u8, Some("D5")).unwrap(), "00042");
    assert_eq!(polynum::to_string(-1i8, Some("X")).unwrap(), "FF");
    assert_eq!(polynum::to_string(255u16, Some("x")).unwrap(), "ff");
    assert_eq!(polynum::to_string(12345i64, Some("E2")).unwrap(), "1.23E+004");
    assert_eq!(polynum::to_string(7i32, Some("F1")).unwrap(), "7.0");
    assert_kind(polynum::to_string(1i32, Some("Q")), ErrorKind::Format);
}

#[test]
fn float_formats() {
    assert_eq!(polynum::to_string(1.5f64, None).unwrap(), "1.5");
    assert_eq!(polynum::to_string(1234.5678f64, Some("N2")).unwrap(), "1,234.57");
    assert_eq!(polynum::to_string(0.125f64, Some("F2")).unwrap(), "0.13");
    assert_eq!(polynum::to_string(f64::NAN, None).unwrap(), "NaN");
    assert_eq!(polynum::to_string(f64::NEG_INFINITY, None).unwrap(), "-Infinity");
    assert_kind(polynum::to_string(1.0f64, Some("D")), ErrorKind::Format);
    assert_kind(polynum::to_string(1.0f64, Some("X")), ErrorKind::Format);
}

#[test]
fn bigint_formats() {
    assert_eq!(polynum::to_string(BigInt::from(15), Some("X")).unwrap(), "0F");
    assert_eq!(polynum::to_string(BigInt::from(-1), Some("X")).unwrap(), "F");
    assert_eq!(polynum::to_string(BigInt::from(-128), Some("X")).unwrap(), "80");
    assert_eq!(polynum::to_string(BigInt::from(1_000_000), Some("N0")).unwrap(), "1,000,000");
}

#[test]
fn culture_symbols_apply_both_ways() {
    let culture = comma_culture();
    assert_eq!(
        polynum::to_string_with(1234.5f64, Some("N2"), &culture).unwrap(),
        "1.234,50"
    );
    assert_eq!(
        polynum::parse_with::<f64>("1.234,5", None, &culture).unwrap(),
        1234.5
    );
    assert_eq!(
        polynum::try_parse_with::<Decimal>("-0,25", None, &culture),
        Some(Decimal::from_str("-0.25").unwrap())
    );

    let mut custom = Culture::default();
    custom.nan_symbol = "n/a".to_string();
    assert_eq!(polynum::to_string_with(f32::NAN, None, &custom).unwrap(), "n/a");
    assert!(polynum::parse_with::<f32>("N/A", None, &custom).unwrap().is_nan());
}

#[test]
fn try_format_writes_only_when_it_fits() {
    let culture = Culture::default();
    let mut exact = [0u8; 4];
    assert_eq!(polynum::try_format(-123i16, &mut exact, None, &culture), Some(4));
    assert_eq!(&exact, b"-123");

    let mut short = [b'#'; 3];
    assert_eq!(polynum::try_format(-123i16, &mut short, None, &culture), None);
    assert_eq!(&short, b"###");

    let mut any = [0u8; 16];
    assert_eq!(polynum::try_format(1i32, &mut any, Some("Q"), &culture), None);
}
