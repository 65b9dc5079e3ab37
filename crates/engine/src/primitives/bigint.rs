//! Arbitrary-precision integer adapter over `num-bigint`

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use polynum_core::text::{self, render, DecimalDigits, FormatKind, FormatSpec, ParsedNumber};
use polynum_core::{
    Culture, Error, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar, TypeCode,
};

/// Most decimal digits an exponent may expand parsed text to
///
/// Text such as `1e5000` parses; beyond this many digits parsing reports
/// `Overflow` rather than allocating without bound.
pub const MAX_PARSED_DIGITS: usize = 1 << 20;

/// Adapter for [`BigInt`]
///
/// Unbounded, so `max_value` and `min_value` are unsupported. Bitwise operations
/// use infinite two's complement; a negative shift count shifts the other way.
/// Parsed text is limited to [`MAX_PARSED_DIGITS`] digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntOperations;

impl BigIntOperations {
    /// Create the adapter
    pub const fn new() -> Self {
        Self
    }
}

/// Shortest two's complement hex whose top nibble carries the sign
fn to_signed_hex(value: &BigInt) -> String {
    if value.sign() != Sign::Minus {
        let hex = value.to_str_radix(16).to_ascii_uppercase();
        return match hex.as_bytes().first() {
            Some(b'8'..=b'9') | Some(b'A'..=b'F') => format!("0{}", hex),
            _ => hex,
        };
    }
    // -v - 1 has the same nibbles, inverted
    let inverted = -value - BigInt::one();
    let width = if inverted.is_zero() {
        1
    } else {
        let hex = inverted.to_str_radix(16);
        match hex.as_bytes().first() {
            Some(b'0'..=b'7') => hex.len(),
            _ => hex.len() + 1,
        }
    };
    let pattern = (BigInt::one() << (4 * width)) + value;
    let hex = pattern.to_str_radix(16).to_ascii_uppercase();
    format!("{:0>width$}", hex, width = width)
}

/// Parse hex digits whose top nibble carries the sign
fn from_signed_hex(digits: &str) -> Result<BigInt> {
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::format(format!("'{}' is not valid hex", digits)))?;
    match digits.as_bytes().first() {
        Some(b'8'..=b'9') | Some(b'A'..=b'F') | Some(b'a'..=b'f') => {
            Ok(magnitude - (BigInt::one() << (4 * digits.len())))
        }
        _ => Ok(magnitude),
    }
}

impl NumericOperations<BigInt> for BigIntOperations {
    fn type_code(&self) -> TypeCode {
        TypeCode::Object
    }

    fn zero(&self) -> Result<BigInt> {
        Ok(BigInt::zero())
    }

    fn one(&self) -> Result<BigInt> {
        Ok(BigInt::one())
    }

    fn minus_one(&self) -> Result<BigInt> {
        Ok(-BigInt::one())
    }

    fn equals(&self, left: &BigInt, right: &BigInt) -> bool {
        left == right
    }

    fn less_than(&self, left: &BigInt, right: &BigInt) -> bool {
        left < right
    }

    fn less_or_equal(&self, left: &BigInt, right: &BigInt) -> bool {
        left <= right
    }

    fn compare(&self, left: &BigInt, right: &BigInt) -> Ordering {
        left.cmp(right)
    }

    fn add(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left + right)
    }

    fn subtract(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left - right)
    }

    fn multiply(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left * right)
    }

    fn divide(&self, dividend: &BigInt, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<BigInt>());
        }
        Ok(dividend / divisor)
    }

    fn remainder(&self, dividend: &BigInt, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<BigInt>());
        }
        Ok(dividend % divisor)
    }

    fn negate(&self, value: &BigInt) -> Result<BigInt> {
        Ok(-value)
    }

    fn abs(&self, value: &BigInt) -> Result<BigInt> {
        Ok(value.abs())
    }

    fn sign(&self, value: &BigInt) -> Result<i32> {
        Ok(match value.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        })
    }

    fn bitwise_and(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left & right)
    }

    fn bitwise_or(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left | right)
    }

    fn xor(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(left ^ right)
    }

    fn ones_complement(&self, value: &BigInt) -> Result<BigInt> {
        Ok(!value)
    }

    fn left_shift(&self, value: &BigInt, shift: i32) -> Result<BigInt> {
        let count = shift.unsigned_abs() as usize;
        Ok(if shift >= 0 { value << count } else { value >> count })
    }

    fn right_shift(&self, value: &BigInt, shift: i32) -> Result<BigInt> {
        let count = shift.unsigned_abs() as usize;
        Ok(if shift >= 0 { value >> count } else { value << count })
    }

    fn is_even(&self, value: &BigInt) -> Result<bool> {
        Ok((value % &BigInt::from(2u8)).is_zero())
    }

    fn is_odd(&self, value: &BigInt) -> Result<bool> {
        Ok(!(value % &BigInt::from(2u8)).is_zero())
    }

    fn is_power_of_two(&self, value: &BigInt) -> Result<bool> {
        if value.sign() != Sign::Plus {
            return Ok(false);
        }
        let below = value - BigInt::one();
        Ok((value & &below).is_zero())
    }

    fn floor(&self, value: &BigInt) -> Result<BigInt> {
        Ok(value.clone())
    }

    fn ceiling(&self, value: &BigInt) -> Result<BigInt> {
        Ok(value.clone())
    }

    fn truncate(&self, value: &BigInt) -> Result<BigInt> {
        Ok(value.clone())
    }

    fn round(&self, value: &BigInt, _digits: i32, _mode: MidpointRounding) -> Result<BigInt> {
        Ok(value.clone())
    }

    fn max(&self, left: &BigInt, right: &BigInt) -> BigInt {
        if left >= right {
            left.clone()
        } else {
            right.clone()
        }
    }

    fn min(&self, left: &BigInt, right: &BigInt) -> BigInt {
        if left <= right {
            left.clone()
        } else {
            right.clone()
        }
    }

    fn to_scalar(&self, value: &BigInt) -> Scalar {
        Scalar::Big(value.clone())
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<BigInt> {
        scalar.into_big()
    }

    fn format(&self, value: &BigInt, format: Option<&str>, culture: &Culture) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        if spec.kind == FormatKind::Hex {
            return Ok(render::render_hex(&to_signed_hex(value), &spec));
        }
        render::render(&DecimalDigits::from_plain(&value.to_string()), &spec, culture)
    }

    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<BigInt> {
        let styles = styles.unwrap_or(NumberStyles::INTEGER);
        match text::scan(text, styles, culture)? {
            ParsedNumber::Hex(digits) => from_signed_hex(&digits),
            ParsedNumber::Decimal(digits) => {
                let integral = digits.integral_digits_within(MAX_PARSED_DIGITS)?;
                let magnitude = BigInt::parse_bytes(integral.as_bytes(), 10)
                    .ok_or_else(|| Error::format(format!("'{}' is not a valid integer", text)))?;
                Ok(if digits.negative { -magnitude } else { magnitude })
            }
        }
    }
}
