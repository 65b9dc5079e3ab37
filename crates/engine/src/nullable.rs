//! Nullable lifting adapter
//!
//! `Option<U>` resolves to [`NullableOperations<U>`], which wraps `U`'s adapter
//! and lifts every operation over absence:
//!
//! - value-producing operations return `None` as soon as any operand is `None`
//! - `None == None`, and `None` orders below every present value
//! - ordering predicates (`<`, `<=`, `>`, `>=`) are false when either side is `None`
//! - `sign(None)` is `-2`, the parity predicates are false
//!
//! Optional capabilities stay optional: an operation `U` does not support fails
//! even when the operand is `None`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use polynum_core::{
    Culture, ErrorKind, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar,
    TypeCode,
};

use crate::numeric::{Numeric, Resolution, SharedOperations};

/// Sign reported for an absent value
pub const ABSENT_SIGN: i32 = -2;

impl<U: Numeric> Numeric for Option<U> {
    fn resolution() -> Resolution<Self> {
        Resolution::Nullable(|registry| {
            let inner = registry.resolve::<U>()?;
            Ok(Arc::new(NullableOperations::new(inner)))
        })
    }
}

/// Adapter for `Option<U>`
pub struct NullableOperations<U> {
    inner: SharedOperations<U>,
}

impl<U: Numeric> NullableOperations<U> {
    /// Wrap `U`'s adapter
    pub fn new(inner: SharedOperations<U>) -> Self {
        Self { inner }
    }

    /// The wrapped adapter
    pub fn inner(&self) -> &SharedOperations<U> {
        &self.inner
    }

    fn lift(&self, value: &Option<U>, op: impl FnOnce(&U) -> Result<U>) -> Result<Option<U>> {
        value.as_ref().map(op).transpose()
    }

    fn lift2(
        &self,
        left: &Option<U>,
        right: &Option<U>,
        op: impl FnOnce(&U, &U) -> Result<U>,
    ) -> Result<Option<U>> {
        match (left, right) {
            (Some(l), Some(r)) => op(l, r).map(Some),
            _ => Ok(None),
        }
    }

    /// Fail if `U` does not support `op` at all; other failures are ignored
    fn probe<R>(&self, op: impl FnOnce(&U) -> Result<R>) -> Result<()> {
        let zero = self.inner.zero()?;
        match op(&zero) {
            Err(e) if e.kind() == ErrorKind::UnsupportedOperation => Err(e),
            _ => Ok(()),
        }
    }

    fn lift_optional(
        &self,
        value: &Option<U>,
        op: impl Fn(&U) -> Result<U>,
    ) -> Result<Option<U>> {
        match value {
            Some(v) => op(v).map(Some),
            None => self.probe(op).map(|_| None),
        }
    }

    fn lift2_optional(
        &self,
        left: &Option<U>,
        right: &Option<U>,
        op: impl Fn(&U, &U) -> Result<U>,
    ) -> Result<Option<U>> {
        match (left, right) {
            (Some(l), Some(r)) => op(l, r).map(Some),
            _ => self.probe(|zero| op(zero, zero)).map(|_| None),
        }
    }

    fn predicate(&self, value: &Option<U>, op: impl Fn(&U) -> Result<bool>) -> Result<bool> {
        match value {
            Some(v) => op(v),
            None => self.probe(op).map(|_| false),
        }
    }

    fn ordered(&self, left: &Option<U>, right: &Option<U>, op: impl FnOnce(&U, &U) -> bool) -> bool {
        match (left, right) {
            (Some(l), Some(r)) => op(l, r),
            _ => false,
        }
    }
}

impl<U> fmt::Debug for NullableOperations<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NullableOperations<{}>", std::any::type_name::<U>())
    }
}

impl<U: Numeric> NumericOperations<Option<U>> for NullableOperations<U> {
    fn type_code(&self) -> TypeCode {
        self.inner.type_code()
    }

    // ==================== Identity ====================

    fn zero(&self) -> Result<Option<U>> {
        self.inner.zero().map(Some)
    }

    fn one(&self) -> Result<Option<U>> {
        self.inner.one().map(Some)
    }

    fn minus_one(&self) -> Result<Option<U>> {
        self.inner.minus_one().map(Some)
    }

    fn max_value(&self) -> Result<Option<U>> {
        self.inner.max_value().map(Some)
    }

    fn min_value(&self) -> Result<Option<U>> {
        self.inner.min_value().map(Some)
    }

    // ==================== Equality & Ordering ====================

    fn equals(&self, left: &Option<U>, right: &Option<U>) -> bool {
        match (left, right) {
            (Some(l), Some(r)) => self.inner.equals(l, r),
            (None, None) => true,
            _ => false,
        }
    }

    fn not_equals(&self, left: &Option<U>, right: &Option<U>) -> bool {
        !self.equals(left, right)
    }

    fn less_than(&self, left: &Option<U>, right: &Option<U>) -> bool {
        self.ordered(left, right, |l, r| self.inner.less_than(l, r))
    }

    fn less_or_equal(&self, left: &Option<U>, right: &Option<U>) -> bool {
        self.ordered(left, right, |l, r| self.inner.less_or_equal(l, r))
    }

    fn greater_than(&self, left: &Option<U>, right: &Option<U>) -> bool {
        self.ordered(left, right, |l, r| self.inner.greater_than(l, r))
    }

    fn greater_or_equal(&self, left: &Option<U>, right: &Option<U>) -> bool {
        self.ordered(left, right, |l, r| self.inner.greater_or_equal(l, r))
    }

    fn compare(&self, left: &Option<U>, right: &Option<U>) -> Ordering {
        match (left, right) {
            (Some(l), Some(r)) => self.inner.compare(l, r),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }

    // ==================== Arithmetic ====================

    fn add(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2(left, right, |l, r| self.inner.add(l, r))
    }

    fn subtract(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2(left, right, |l, r| self.inner.subtract(l, r))
    }

    fn multiply(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2(left, right, |l, r| self.inner.multiply(l, r))
    }

    fn divide(&self, dividend: &Option<U>, divisor: &Option<U>) -> Result<Option<U>> {
        self.lift2(dividend, divisor, |l, r| self.inner.divide(l, r))
    }

    fn remainder(&self, dividend: &Option<U>, divisor: &Option<U>) -> Result<Option<U>> {
        self.lift2(dividend, divisor, |l, r| self.inner.remainder(l, r))
    }

    fn div_rem(
        &self,
        dividend: &Option<U>,
        divisor: &Option<U>,
    ) -> Result<(Option<U>, Option<U>)> {
        match (dividend, divisor) {
            (Some(l), Some(r)) => {
                let (quotient, remainder) = self.inner.div_rem(l, r)?;
                Ok((Some(quotient), Some(remainder)))
            }
            _ => Ok((None, None)),
        }
    }

    fn negate(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift_optional(value, |v| self.inner.negate(v))
    }

    fn abs(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift(value, |v| self.inner.abs(v))
    }

    fn sign(&self, value: &Option<U>) -> Result<i32> {
        match value {
            Some(v) => self.inner.sign(v),
            None => Ok(ABSENT_SIGN),
        }
    }

    // ==================== Bitwise ====================

    fn bitwise_and(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2_optional(left, right, |l, r| self.inner.bitwise_and(l, r))
    }

    fn bitwise_or(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2_optional(left, right, |l, r| self.inner.bitwise_or(l, r))
    }

    fn xor(&self, left: &Option<U>, right: &Option<U>) -> Result<Option<U>> {
        self.lift2_optional(left, right, |l, r| self.inner.xor(l, r))
    }

    fn ones_complement(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift_optional(value, |v| self.inner.ones_complement(v))
    }

    fn left_shift(&self, value: &Option<U>, shift: i32) -> Result<Option<U>> {
        self.lift_optional(value, |v| self.inner.left_shift(v, shift))
    }

    fn right_shift(&self, value: &Option<U>, shift: i32) -> Result<Option<U>> {
        self.lift_optional(value, |v| self.inner.right_shift(v, shift))
    }

    // ==================== Predicates ====================

    fn is_even(&self, value: &Option<U>) -> Result<bool> {
        self.predicate(value, |v| self.inner.is_even(v))
    }

    fn is_odd(&self, value: &Option<U>) -> Result<bool> {
        self.predicate(value, |v| self.inner.is_odd(v))
    }

    fn is_power_of_two(&self, value: &Option<U>) -> Result<bool> {
        self.predicate(value, |v| self.inner.is_power_of_two(v))
    }

    // ==================== Rounding ====================

    fn floor(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift(value, |v| self.inner.floor(v))
    }

    fn ceiling(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift(value, |v| self.inner.ceiling(v))
    }

    fn truncate(&self, value: &Option<U>) -> Result<Option<U>> {
        self.lift(value, |v| self.inner.truncate(v))
    }

    fn round(&self, value: &Option<U>, digits: i32, mode: MidpointRounding) -> Result<Option<U>> {
        self.lift(value, |v| self.inner.round(v, digits, mode))
    }

    // ==================== Min / Max ====================

    fn max(&self, left: &Option<U>, right: &Option<U>) -> Option<U> {
        match (left, right) {
            (Some(l), Some(r)) => Some(self.inner.max(l, r)),
            _ => None,
        }
    }

    fn min(&self, left: &Option<U>, right: &Option<U>) -> Option<U> {
        match (left, right) {
            (Some(l), Some(r)) => Some(self.inner.min(l, r)),
            _ => None,
        }
    }

    fn clamp(&self, value: &Option<U>, low: &Option<U>, high: &Option<U>) -> Result<Option<U>> {
        match (value, low, high) {
            (Some(v), Some(l), Some(h)) => self.inner.clamp(v, l, h).map(Some),
            _ => Ok(None),
        }
    }

    // ==================== Conversion ====================

    fn to_scalar(&self, value: &Option<U>) -> Scalar {
        match value {
            Some(v) => self.inner.to_scalar(v),
            None => Scalar::Absent,
        }
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<Option<U>> {
        if scalar.is_absent() {
            return Ok(None);
        }
        self.inner.from_scalar(scalar).map(Some)
    }

    // ==================== Text ====================

    fn format(&self, value: &Option<U>, format: Option<&str>, culture: &Culture) -> Result<String> {
        match value {
            Some(v) => self.inner.format(v, format, culture),
            None => Ok(String::new()),
        }
    }

    fn try_format(
        &self,
        value: &Option<U>,
        dest: &mut [u8],
        format: Option<&str>,
        culture: &Culture,
    ) -> Option<usize> {
        let value = value.as_ref()?;
        self.inner.try_format(value, dest, format, culture)
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        culture: &Culture,
    ) -> Result<Option<U>> {
        self.inner.parse(text, styles, culture).map(Some)
    }
}
