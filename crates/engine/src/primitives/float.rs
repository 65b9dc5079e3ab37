//! Binary floating-point adapter

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use num_traits::Float;
use polynum_core::text::{self, render, DecimalDigits, FormatSpec, ParsedNumber, Special};
use polynum_core::{
    Culture, Error, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar, TypeCode,
};

use super::reject_hex;

/// Largest `digits` accepted by `round`
const MAX_ROUND_DIGITS: i32 = 15;

mod sealed {
    pub trait Sealed {}
}

/// A built-in binary float; sealed, implemented for `f32` and `f64`
pub trait PrimitiveFloat:
    Float + fmt::Display + FromStr + Send + Sync + 'static + sealed::Sealed
{
    /// Category tag
    const TYPE_CODE: TypeCode;

    /// Exact widening to `f64`
    fn widen(self) -> f64;

    /// Nearest value of this width
    fn narrow(value: f64) -> Self;

    /// Build from the conversion pivot, checking range
    fn from_pivot(scalar: Scalar) -> Result<Self>;
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl PrimitiveFloat for f32 {
    const TYPE_CODE: TypeCode = TypeCode::F32;

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn narrow(value: f64) -> Self {
        value as f32
    }

    fn from_pivot(scalar: Scalar) -> Result<Self> {
        scalar.into_f32()
    }
}

impl PrimitiveFloat for f64 {
    const TYPE_CODE: TypeCode = TypeCode::F64;

    fn widen(self) -> f64 {
        self
    }

    fn narrow(value: f64) -> Self {
        value
    }

    fn from_pivot(scalar: Scalar) -> Result<Self> {
        scalar.into_f64()
    }
}

/// Adapter for `f32` and `f64`
///
/// Arithmetic follows IEEE 754: division by zero yields an infinity and invalid
/// operations yield NaN. `compare` is a total order with NaN below every number;
/// the boolean comparisons keep IEEE semantics.
pub struct FloatOperations<T>(PhantomData<fn() -> T>);

impl<T> FloatOperations<T> {
    /// Create the adapter
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FloatOperations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FloatOperations<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatOperations<{}>", std::any::type_name::<T>())
    }
}

impl<T: PrimitiveFloat> NumericOperations<T> for FloatOperations<T> {
    fn type_code(&self) -> TypeCode {
        T::TYPE_CODE
    }

    fn zero(&self) -> Result<T> {
        Ok(T::zero())
    }

    fn one(&self) -> Result<T> {
        Ok(T::one())
    }

    fn minus_one(&self) -> Result<T> {
        Ok(-T::one())
    }

    fn max_value(&self) -> Result<T> {
        Ok(<T as Float>::max_value())
    }

    fn min_value(&self) -> Result<T> {
        Ok(<T as Float>::min_value())
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    fn less_than(&self, left: &T, right: &T) -> bool {
        left < right
    }

    fn less_or_equal(&self, left: &T, right: &T) -> bool {
        left <= right
    }

    fn compare(&self, left: &T, right: &T) -> Ordering {
        match (left.is_nan(), right.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        }
    }

    fn add(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left + *right)
    }

    fn subtract(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left - *right)
    }

    fn multiply(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left * *right)
    }

    fn divide(&self, dividend: &T, divisor: &T) -> Result<T> {
        Ok(*dividend / *divisor)
    }

    fn remainder(&self, dividend: &T, divisor: &T) -> Result<T> {
        Ok(*dividend % *divisor)
    }

    fn negate(&self, value: &T) -> Result<T> {
        Ok(-*value)
    }

    fn abs(&self, value: &T) -> Result<T> {
        Ok(value.abs())
    }

    fn sign(&self, value: &T) -> Result<i32> {
        if value.is_nan() {
            return Err(Error::invalid_argument("sign is undefined for NaN"));
        }
        Ok(if *value > T::zero() {
            1
        } else if *value < T::zero() {
            -1
        } else {
            0
        })
    }

    fn floor(&self, value: &T) -> Result<T> {
        Ok(value.floor())
    }

    fn ceiling(&self, value: &T) -> Result<T> {
        Ok(value.ceil())
    }

    fn truncate(&self, value: &T) -> Result<T> {
        Ok(value.trunc())
    }

    fn round(&self, value: &T, digits: i32, mode: MidpointRounding) -> Result<T> {
        if !(0..=MAX_ROUND_DIGITS).contains(&digits) {
            return Err(Error::invalid_argument(format!(
                "rounding digits must be between 0 and {}, got {}",
                MAX_ROUND_DIGITS, digits
            )));
        }
        let wide = value.widen();
        if !wide.is_finite() {
            return Ok(*value);
        }
        let power = 10f64.powi(digits);
        let scaled = wide * power;
        // Beyond 2^52 every f64 is already integral
        if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
            return Ok(*value);
        }
        Ok(T::narrow(mode.round_f64(scaled) / power))
    }

    fn max(&self, left: &T, right: &T) -> T {
        if left.is_nan() || right.is_nan() {
            return T::nan();
        }
        if *left >= *right {
            *left
        } else {
            *right
        }
    }

    fn min(&self, left: &T, right: &T) -> T {
        if left.is_nan() || right.is_nan() {
            return T::nan();
        }
        if *left <= *right {
            *left
        } else {
            *right
        }
    }

    fn to_scalar(&self, value: &T) -> Scalar {
        Scalar::Float(value.widen())
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<T> {
        if scalar.is_absent() {
            return Ok(T::zero());
        }
        T::from_pivot(scalar)
    }

    fn format(&self, value: &T, format: Option<&str>, culture: &Culture) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        if spec.is_integral_only() {
            return Err(Error::format(format!(
                "format '{}' requires an integral type",
                format.unwrap_or_default()
            )));
        }
        culture.validate()?;
        if value.is_nan() {
            return Ok(render::render_special(Special::NaN, culture));
        }
        if value.is_infinite() {
            let special = if value.is_sign_negative() {
                Special::NegativeInfinity
            } else {
                Special::PositiveInfinity
            };
            return Ok(render::render_special(special, culture));
        }
        render::render(&DecimalDigits::from_plain(&value.to_string()), &spec, culture)
    }

    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<T> {
        let styles = styles.unwrap_or(NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS);
        reject_hex::<T>(styles)?;
        culture.validate()?;
        if let Some(special) = text::scan_special(text, styles, culture) {
            return Ok(match special {
                Special::NaN => T::nan(),
                Special::PositiveInfinity => T::infinity(),
                Special::NegativeInfinity => T::neg_infinity(),
            });
        }
        match text::scan(text, styles, culture)? {
            ParsedNumber::Decimal(digits) => digits
                .to_float_literal()
                .parse::<T>()
                .map_err(|_| Error::format(format!("'{}' is not a valid number", text))),
            ParsedNumber::Hex(_) => Err(Error::invalid_argument("hex digits for a float")),
        }
    }
}
