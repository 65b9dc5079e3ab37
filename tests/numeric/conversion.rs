//! Conversion through the scalar pivot

use std::str::FromStr;

use crate::common::*;
use num_bigint::BigInt;
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
}

#[test]
fn widening_and_narrowing_integers() {
    assert_eq!(polynum::convert::<i8, i128>(-5).unwrap(), -5);
    assert_eq!(polynum::convert::<u64, i64>(42).unwrap(), 42);
    assert_eq!(polynum::convert::<i64, u32>(4_294_967_295).unwrap(), u32::MAX);
    assert_kind(polynum::convert::<i64, u32>(4_294_967_296), ErrorKind::Overflow);
    assert_kind(polynum::convert::<i32, u8>(-1), ErrorKind::Overflow);
    assert_kind(polynum::convert::<u128, i128>(u128::MAX), ErrorKind::Overflow);
    assert_eq!(polynum::convert::<usize, isize>(7).unwrap(), 7);
}

#[test]
fn fractional_sources_truncate_toward_zero() {
    assert_eq!(polynum::convert::<f64, i32>(-2.9).unwrap(), -2);
    assert_eq!(polynum::convert::<f32, u8>(255.5).unwrap(), 255);
    assert_eq!(polynum::convert::<Decimal, i64>(dec("-7.99")).unwrap(), -7);
    assert_eq!(polynum::convert::<Decimal, BigInt>(dec("12.5")).unwrap(), BigInt::from(12));
}

#[test]
fn non_finite_sources_overflow_finite_targets() {
    assert_kind(polynum::convert::<f64, i32>(f64::NAN), ErrorKind::Overflow);
    assert_kind(polynum::convert::<f64, i64>(f64::INFINITY), ErrorKind::Overflow);
    assert_kind(polynum::convert::<f64, Decimal>(f64::NAN), ErrorKind::Overflow);
    assert_kind(polynum::convert::<f32, BigInt>(f32::INFINITY), ErrorKind::Overflow);
    assert!(polynum::convert::<f64, f32>(f64::NAN).unwrap().is_nan());
    assert_eq!(
        polynum::convert::<f64, f32>(f64::NEG_INFINITY).unwrap(),
        f32::NEG_INFINITY
    );
}

#[test]
fn float_range_limits() {
    assert_kind(polynum::convert::<f64, f32>(1e39), ErrorKind::Overflow);
    assert_eq!(polynum::convert::<f64, f32>(0.5).unwrap(), 0.5);
    assert_eq!(polynum::convert::<i32, f64>(i32::MIN).unwrap(), -2147483648.0);
    assert_eq!(polynum::convert::<u64, f32>(u64::MAX).unwrap(), u64::MAX as f32);
    assert_kind(polynum::convert::<u128, f32>(u128::MAX), ErrorKind::Overflow);
}

#[test]
fn decimal_and_bigint_targets() {
    assert_eq!(polynum::convert::<i64, Decimal>(-12).unwrap(), dec("-12"));
    assert_eq!(polynum::convert::<f64, Decimal>(0.5).unwrap(), dec("0.5"));
    assert_kind(polynum::convert::<f64, Decimal>(1e30), ErrorKind::Overflow);
    assert_eq!(
        polynum::convert::<u128, BigInt>(u128::MAX).unwrap(),
        BigInt::from(u128::MAX)
    );
    assert_eq!(
        polynum::convert::<f64, BigInt>(1e20).unwrap(),
        BigInt::from(100_000_000_000_000_000_000u128)
    );
}

#[test]
fn bigint_sources_check_target_range() {
    let huge = BigInt::from(u128::MAX) * BigInt::from(4);
    assert_kind(polynum::convert::<BigInt, u128>(huge.clone()), ErrorKind::Overflow);
    assert_kind(polynum::convert::<BigInt, Decimal>(huge), ErrorKind::Overflow);
    assert_eq!(polynum::convert::<BigInt, i8>(BigInt::from(-128)).unwrap(), -128);
    assert_eq!(polynum::convert::<BigInt, f64>(BigInt::from(3)).unwrap(), 3.0);
}

#[test]
fn optional_conversions() {
    assert_eq!(polynum::convert::<Option<f64>, Option<u8>>(None).unwrap(), None);
    assert_eq!(polynum::convert::<Option<f64>, Option<u8>>(Some(9.9)).unwrap(), Some(9));
    assert_eq!(polynum::convert::<Option<u8>, Decimal>(None).unwrap(), Decimal::ZERO);
    assert_eq!(polynum::convert::<i16, Option<BigInt>>(-3).unwrap(), Some(BigInt::from(-3)));
    assert_kind(
        polynum::convert::<Option<i32>, Option<u8>>(Some(-1)),
        ErrorKind::Overflow,
    );
}

#[test]
fn identity_conversion_is_lossless() {
    assert_eq!(polynum::convert::<i128, i128>(i128::MIN).unwrap(), i128::MIN);
    assert_eq!(polynum::convert::<Decimal, Decimal>(Decimal::MAX).unwrap(), Decimal::MAX);
    assert_eq!(polynum::convert::<f32, f32>(f32::MAX).unwrap(), f32::MAX);
}

#[test]
fn facade_to_converts() {
    let value = Number::create(1000u16).unwrap();
    assert_eq!(value.to::<f32>().unwrap(), 1000.0);
    assert_kind(value.to::<i8>(), ErrorKind::Overflow);
    assert_eq!(value.to::<Option<i64>>().unwrap(), Some(1000));
}
