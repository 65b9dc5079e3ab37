//! Registry resolution and custom types

use std::sync::Arc;
use std::thread;

use crate::common::*;
use num_bigint::BigInt;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
struct Unregistered(u8);

impl Numeric for Unregistered {}

// ============================================================================
// Built-in resolution
// ============================================================================

#[test]
fn every_builtin_kind_resolves() {
    let registry = OperationsRegistry::new();
    assert_eq!(registry.resolve::<i8>().unwrap().type_code(), TypeCode::I8);
    assert_eq!(registry.resolve::<u128>().unwrap().type_code(), TypeCode::U128);
    assert_eq!(registry.resolve::<f32>().unwrap().type_code(), TypeCode::F32);
    assert_eq!(registry.resolve::<Decimal>().unwrap().type_code(), TypeCode::Decimal);
    assert_eq!(registry.resolve::<BigInt>().unwrap().type_code(), TypeCode::Object);
    assert_eq!(registry.resolve::<usize>().unwrap().type_code(), TypeCode::Object);
    assert_eq!(registry.len(), 6);
}

#[test]
fn resolution_returns_one_instance_per_type() {
    let registry = OperationsRegistry::new();
    let first = registry.resolve::<u32>().unwrap();
    let second = registry.resolve::<u32>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let global_a = polynum::operations::<i64>().unwrap();
    let global_b = polynum::operations::<i64>().unwrap();
    assert!(Arc::ptr_eq(&global_a, &global_b));
}

#[test]
fn unknown_type_is_unsupported() {
    assert_kind(polynum::operations::<Unregistered>(), ErrorKind::UnsupportedType);
    assert_kind(Number::create(Unregistered(1)), ErrorKind::UnsupportedType);
    assert_kind(
        polynum::add(Unregistered(1), Unregistered(2)),
        ErrorKind::UnsupportedType,
    );
    assert_eq!(polynum::try_parse::<Unregistered>("1", None), None);
}

#[test]
fn concurrent_first_resolution_publishes_one_adapter() {
    let registry = Arc::new(OperationsRegistry::new());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.resolve::<Option<u64>>().unwrap())
        })
        .collect();
    let adapters: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for adapter in &adapters[1..] {
        assert!(Arc::ptr_eq(&adapters[0], adapter));
    }
    // Option<u64> and u64
    assert_eq!(registry.len(), 2);
}

// ============================================================================
// Explicit registration
// ============================================================================

#[test]
fn custom_type_works_through_the_facade() {
    ensure_cents_registered();

    let price = Number::create(Cents(1999)).unwrap();
    let tax = Number::create(Cents(160)).unwrap();
    let total = (&price + &tax).unwrap();
    assert_eq!(total.value(), &Cents(2159));
    assert_eq!(total.to_string(), "2159");
    assert_eq!(total.format(Some("N0")).unwrap(), "2,159");
    assert_eq!((total / Cents(0)).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(polynum::type_code::<Cents>().unwrap(), TypeCode::Object);
}

#[test]
fn custom_type_checked_overflow_surfaces() {
    ensure_cents_registered();
    assert_kind(polynum::add(Cents(i64::MAX), Cents(1)), ErrorKind::Overflow);
    assert_kind(polynum::xor(Cents(1), Cents(2)), ErrorKind::UnsupportedOperation);
}

#[test]
fn custom_type_converts_through_the_pivot() {
    ensure_cents_registered();
    assert_eq!(polynum::convert::<Cents, f64>(Cents(250)).unwrap(), 250.0);
    assert_eq!(polynum::convert::<u8, Cents>(7).unwrap(), Cents(7));
    assert_eq!(
        polynum::convert::<Cents, Option<Cents>>(Cents(3)).unwrap(),
        Some(Cents(3))
    );
}

#[test]
fn registering_twice_fails() {
    ensure_cents_registered();
    assert_kind(
        polynum::register_operations::<Cents, _>(CentsOperations::default()),
        ErrorKind::AlreadyRegistered,
    );
}

#[test]
fn registering_a_resolved_type_fails() {
    let registry = OperationsRegistry::new();
    registry.resolve::<i16>().unwrap();
    let err = registry
        .register::<i16, _>(IntegerOperations::<i16>::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyRegistered);
}

#[test]
fn registration_overrides_the_intrinsic_strategy() {
    let registry = OperationsRegistry::new();
    #[derive(Default)]
    struct Saturating;
    impl NumericOperations<u8> for Saturating {
        fn type_code(&self) -> TypeCode {
            TypeCode::U8
        }
        fn zero(&self) -> Result<u8> {
            Ok(0)
        }
        fn one(&self) -> Result<u8> {
            Ok(1)
        }
        fn equals(&self, left: &u8, right: &u8) -> bool {
            left == right
        }
        fn less_than(&self, left: &u8, right: &u8) -> bool {
            left < right
        }
        fn less_or_equal(&self, left: &u8, right: &u8) -> bool {
            left <= right
        }
        fn compare(&self, left: &u8, right: &u8) -> std::cmp::Ordering {
            left.cmp(right)
        }
        fn add(&self, left: &u8, right: &u8) -> Result<u8> {
            Ok(left.saturating_add(*right))
        }
        fn subtract(&self, left: &u8, right: &u8) -> Result<u8> {
            Ok(left.saturating_sub(*right))
        }
        fn multiply(&self, left: &u8, right: &u8) -> Result<u8> {
            Ok(left.saturating_mul(*right))
        }
        fn divide(&self, dividend: &u8, divisor: &u8) -> Result<u8> {
            dividend
                .checked_div(*divisor)
                .ok_or_else(Error::divide_by_zero::<u8>)
        }
        fn remainder(&self, dividend: &u8, divisor: &u8) -> Result<u8> {
            dividend
                .checked_rem(*divisor)
                .ok_or_else(Error::divide_by_zero::<u8>)
        }
        fn abs(&self, value: &u8) -> Result<u8> {
            Ok(*value)
        }
        fn sign(&self, value: &u8) -> Result<i32> {
            Ok(i32::from(*value != 0))
        }
        fn floor(&self, value: &u8) -> Result<u8> {
            Ok(*value)
        }
        fn ceiling(&self, value: &u8) -> Result<u8> {
            Ok(*value)
        }
        fn truncate(&self, value: &u8) -> Result<u8> {
            Ok(*value)
        }
        fn round(&self, value: &u8, _digits: i32, _mode: MidpointRounding) -> Result<u8> {
            Ok(*value)
        }
        fn max(&self, left: &u8, right: &u8) -> u8 {
            *left.max(right)
        }
        fn min(&self, left: &u8, right: &u8) -> u8 {
            *left.min(right)
        }
        fn to_scalar(&self, value: &u8) -> Scalar {
            Scalar::Unsigned(u128::from(*value))
        }
        fn from_scalar(&self, scalar: Scalar) -> Result<u8> {
            scalar.into_integer()
        }
        fn format(&self, value: &u8, _format: Option<&str>, _culture: &Culture) -> Result<String> {
            Ok(value.to_string())
        }
        fn parse(&self, text: &str, _styles: Option<NumberStyles>, _culture: &Culture) -> Result<u8> {
            text.trim()
                .parse()
                .map_err(|_| Error::format("not a byte"))
        }
    }

    registry.register::<u8, _>(Saturating).unwrap();
    let ops = registry.resolve::<u8>().unwrap();
    assert_eq!(ops.add(&250, &10).unwrap(), 255);

    // Nullable lifting composes over the registered adapter
    let lifted = registry.resolve::<Option<u8>>().unwrap();
    assert_eq!(lifted.add(&Some(250), &Some(10)).unwrap(), Some(255));
}

#[test]
fn failed_resolution_is_not_cached() {
    let registry = OperationsRegistry::new();
    assert_kind(registry.resolve::<Unregistered>(), ErrorKind::UnsupportedType);
    assert!(!registry.is_resolved::<Unregistered>());
    assert!(registry.is_empty());
}
