//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::cmp::Ordering;
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;

pub use polynum::{
    Culture, Error, ErrorKind, IntegerOperations, MidpointRounding, Number, NumberStyles,
    Numeric, NumericOperations, OperationsRegistry, Result, Scalar, TypeCode,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();
static INIT_CENTS: Once = Once::new();

/// Route engine logs to the test writer (visible with `--nocapture`)
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(LevelFilter::DEBUG)
            .try_init();
    });
}

/// Register [`CentsOperations`] with the global registry exactly once
pub fn ensure_cents_registered() {
    INIT_CENTS.call_once(|| {
        init_tracing();
        polynum::register_operations::<Cents, _>(CentsOperations::default())
            .expect("Cents must be registered before first use");
    });
}

// ============================================================================
// Custom numeric wrapper
// ============================================================================

/// Money in whole cents; a user type with no intrinsic strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub i64);

impl Numeric for Cents {}

/// Adapter for [`Cents`], delegating to the `i64` adapter
#[derive(Debug, Default)]
pub struct CentsOperations {
    inner: IntegerOperations<i64>,
}

impl NumericOperations<Cents> for CentsOperations {
    fn type_code(&self) -> TypeCode {
        TypeCode::Object
    }

    fn zero(&self) -> Result<Cents> {
        Ok(Cents(0))
    }

    fn one(&self) -> Result<Cents> {
        Ok(Cents(1))
    }

    fn minus_one(&self) -> Result<Cents> {
        Ok(Cents(-1))
    }

    fn equals(&self, left: &Cents, right: &Cents) -> bool {
        left == right
    }

    fn less_than(&self, left: &Cents, right: &Cents) -> bool {
        left < right
    }

    fn less_or_equal(&self, left: &Cents, right: &Cents) -> bool {
        left <= right
    }

    fn compare(&self, left: &Cents, right: &Cents) -> Ordering {
        left.cmp(right)
    }

    fn add(&self, left: &Cents, right: &Cents) -> Result<Cents> {
        left.0
            .checked_add(right.0)
            .map(Cents)
            .ok_or_else(|| Error::overflow("cents addition overflowed"))
    }

    fn subtract(&self, left: &Cents, right: &Cents) -> Result<Cents> {
        left.0
            .checked_sub(right.0)
            .map(Cents)
            .ok_or_else(|| Error::overflow("cents subtraction overflowed"))
    }

    fn multiply(&self, left: &Cents, right: &Cents) -> Result<Cents> {
        self.inner.multiply(&left.0, &right.0).map(Cents)
    }

    fn divide(&self, dividend: &Cents, divisor: &Cents) -> Result<Cents> {
        self.inner.divide(&dividend.0, &divisor.0).map(Cents)
    }

    fn remainder(&self, dividend: &Cents, divisor: &Cents) -> Result<Cents> {
        self.inner.remainder(&dividend.0, &divisor.0).map(Cents)
    }

    fn negate(&self, value: &Cents) -> Result<Cents> {
        self.inner.negate(&value.0).map(Cents)
    }

    fn abs(&self, value: &Cents) -> Result<Cents> {
        self.inner.abs(&value.0).map(Cents)
    }

    fn sign(&self, value: &Cents) -> Result<i32> {
        self.inner.sign(&value.0)
    }

    fn floor(&self, value: &Cents) -> Result<Cents> {
        Ok(*value)
    }

    fn ceiling(&self, value: &Cents) -> Result<Cents> {
        Ok(*value)
    }

    fn truncate(&self, value: &Cents) -> Result<Cents> {
        Ok(*value)
    }

    fn round(&self, value: &Cents, _digits: i32, _mode: MidpointRounding) -> Result<Cents> {
        Ok(*value)
    }

    fn max(&self, left: &Cents, right: &Cents) -> Cents {
        std::cmp::max(*left, *right)
    }

    fn min(&self, left: &Cents, right: &Cents) -> Cents {
        std::cmp::min(*left, *right)
    }

    fn to_scalar(&self, value: &Cents) -> Scalar {
        Scalar::Signed(i128::from(value.0))
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<Cents> {
        self.inner.from_scalar(scalar).map(Cents)
    }

    fn format(&self, value: &Cents, format: Option<&str>, culture: &Culture) -> Result<String> {
        self.inner.format(&value.0, format, culture)
    }

    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<Cents> {
        self.inner.parse(text, styles, culture).map(Cents)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A culture with `,` decimals and `.` groups
pub fn comma_culture() -> Culture {
    Culture {
        decimal_separator: ",".to_string(),
        group_separator: ".".to_string(),
        ..Culture::default()
    }
}

/// Shorthand for asserting an error kind
pub fn assert_kind<T>(result: Result<T>, kind: ErrorKind) {
    match result {
        Ok(_) => panic!("expected {:?}, got Ok", kind),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {}", e),
    }
}
