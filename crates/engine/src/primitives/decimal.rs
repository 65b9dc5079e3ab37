//! Fixed-point decimal adapter over `rust_decimal`

use std::cmp::Ordering;
use std::str::FromStr;

use polynum_core::text::{self, render, DecimalDigits, FormatSpec, ParsedNumber};
use polynum_core::{
    Culture, Error, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar, TypeCode,
};
use rust_decimal::{Decimal, RoundingStrategy};

use super::reject_hex;

/// Largest `digits` accepted by `round`
const MAX_ROUND_DIGITS: i32 = 28;

/// Integral digits beyond which a value cannot be a `Decimal`
const MAX_INTEGRAL_DIGITS: usize = 29;

/// Adapter for [`Decimal`]
///
/// Results outside the decimal range fail with `Overflow`; division by zero
/// fails with `DivideByZero`. There are no bitwise operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalOperations;

impl DecimalOperations {
    /// Create the adapter
    pub const fn new() -> Self {
        Self
    }
}

fn strategy(mode: MidpointRounding) -> RoundingStrategy {
    match mode {
        MidpointRounding::ToEven => RoundingStrategy::MidpointNearestEven,
        MidpointRounding::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        MidpointRounding::ToZero => RoundingStrategy::ToZero,
        MidpointRounding::ToNegativeInfinity => RoundingStrategy::ToNegativeInfinity,
        MidpointRounding::ToPositiveInfinity => RoundingStrategy::ToPositiveInfinity,
    }
}

fn overflow(operation: &str) -> Error {
    Error::overflow(format!("decimal {} result is out of range", operation))
}

impl NumericOperations<Decimal> for DecimalOperations {
    fn type_code(&self) -> TypeCode {
        TypeCode::Decimal
    }

    fn zero(&self) -> Result<Decimal> {
        Ok(Decimal::ZERO)
    }

    fn one(&self) -> Result<Decimal> {
        Ok(Decimal::ONE)
    }

    fn minus_one(&self) -> Result<Decimal> {
        Ok(Decimal::NEGATIVE_ONE)
    }

    fn max_value(&self) -> Result<Decimal> {
        Ok(Decimal::MAX)
    }

    fn min_value(&self) -> Result<Decimal> {
        Ok(Decimal::MIN)
    }

    fn equals(&self, left: &Decimal, right: &Decimal) -> bool {
        left == right
    }

    fn less_than(&self, left: &Decimal, right: &Decimal) -> bool {
        left < right
    }

    fn less_or_equal(&self, left: &Decimal, right: &Decimal) -> bool {
        left <= right
    }

    fn compare(&self, left: &Decimal, right: &Decimal) -> Ordering {
        left.cmp(right)
    }

    fn add(&self, left: &Decimal, right: &Decimal) -> Result<Decimal> {
        left.checked_add(*right).ok_or_else(|| overflow("addition"))
    }

    fn subtract(&self, left: &Decimal, right: &Decimal) -> Result<Decimal> {
        left.checked_sub(*right).ok_or_else(|| overflow("subtraction"))
    }

    fn multiply(&self, left: &Decimal, right: &Decimal) -> Result<Decimal> {
        left.checked_mul(*right).ok_or_else(|| overflow("multiplication"))
    }

    fn divide(&self, dividend: &Decimal, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<Decimal>());
        }
        dividend.checked_div(*divisor).ok_or_else(|| overflow("division"))
    }

    fn remainder(&self, dividend: &Decimal, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<Decimal>());
        }
        dividend.checked_rem(*divisor).ok_or_else(|| overflow("remainder"))
    }

    fn negate(&self, value: &Decimal) -> Result<Decimal> {
        Ok(-*value)
    }

    fn abs(&self, value: &Decimal) -> Result<Decimal> {
        Ok(value.abs())
    }

    fn sign(&self, value: &Decimal) -> Result<i32> {
        Ok(if value.is_zero() {
            0
        } else if value.is_sign_negative() {
            -1
        } else {
            1
        })
    }

    fn floor(&self, value: &Decimal) -> Result<Decimal> {
        Ok(value.floor())
    }

    fn ceiling(&self, value: &Decimal) -> Result<Decimal> {
        Ok(value.ceil())
    }

    fn truncate(&self, value: &Decimal) -> Result<Decimal> {
        Ok(value.trunc())
    }

    fn round(&self, value: &Decimal, digits: i32, mode: MidpointRounding) -> Result<Decimal> {
        if !(0..=MAX_ROUND_DIGITS).contains(&digits) {
            return Err(Error::invalid_argument(format!(
                "rounding digits must be between 0 and {}, got {}",
                MAX_ROUND_DIGITS, digits
            )));
        }
        Ok(value.round_dp_with_strategy(digits as u32, strategy(mode)))
    }

    fn max(&self, left: &Decimal, right: &Decimal) -> Decimal {
        (*left).max(*right)
    }

    fn min(&self, left: &Decimal, right: &Decimal) -> Decimal {
        (*left).min(*right)
    }

    fn to_scalar(&self, value: &Decimal) -> Scalar {
        Scalar::Decimal(*value)
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<Decimal> {
        scalar.into_decimal()
    }

    fn format(&self, value: &Decimal, format: Option<&str>, culture: &Culture) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        if spec.is_integral_only() {
            return Err(Error::format(format!(
                "format '{}' requires an integral type",
                format.unwrap_or_default()
            )));
        }
        render::render(&DecimalDigits::from_plain(&value.to_string()), &spec, culture)
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        culture: &Culture,
    ) -> Result<Decimal> {
        let styles = styles.unwrap_or(NumberStyles::NUMBER);
        reject_hex::<Decimal>(styles)?;
        let digits = match text::scan(text, styles, culture)? {
            ParsedNumber::Decimal(digits) => digits,
            ParsedNumber::Hex(_) => return Err(Error::invalid_argument("hex digits for a decimal")),
        };
        let rounded = digits.round_fraction(MAX_ROUND_DIGITS as usize)?;
        if rounded.integral.len() > MAX_INTEGRAL_DIGITS {
            return Err(Error::out_of_range::<Decimal>());
        }
        let plain = rounded.to_plain(MAX_INTEGRAL_DIGITS)?;
        // The text is already well-formed; what remains can only be a range failure
        Decimal::from_str(&plain).map_err(|_| Error::out_of_range::<Decimal>())
    }
}
