//! Fixed-width integer adapter

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use num_traits::{
    CheckedNeg, CheckedRem, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl,
    WrappingShr, WrappingSub,
};
use polynum_core::text::{self, render, DecimalDigits, FormatKind, FormatSpec, ParsedNumber};
use polynum_core::{
    Culture, Error, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar, TypeCode,
};

mod sealed {
    pub trait Sealed {}
}

/// A built-in fixed-width integer
///
/// Sealed; implemented for every signed and unsigned width including `isize`
/// and `usize`.
pub trait PrimitiveInteger:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + WrappingShr
    + CheckedRem
    + CheckedNeg
    + Hash
    + fmt::Display
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Category tag
    const TYPE_CODE: TypeCode;
    /// True for signed widths
    const SIGNED: bool;
    /// Width in bytes
    const BYTES: usize;

    /// Lower into the conversion pivot
    fn into_scalar(self) -> Scalar;

    /// Two's complement bit pattern, zero-extended
    fn to_bits(self) -> u128;

    /// Reinterpret the low `BYTES` bytes of `bits`
    fn from_bits(bits: u128) -> Self;

    /// Build from sign and magnitude, or `None` if out of range
    fn from_magnitude(magnitude: u128, negative: bool) -> Option<Self>;
}

macro_rules! primitive_integer {
    (signed $t:ty, $unsigned:ty, $code:expr) => {
        impl sealed::Sealed for $t {}

        impl PrimitiveInteger for $t {
            const TYPE_CODE: TypeCode = $code;
            const SIGNED: bool = true;
            const BYTES: usize = std::mem::size_of::<$t>();

            fn into_scalar(self) -> Scalar {
                Scalar::Signed(self as i128)
            }

            fn to_bits(self) -> u128 {
                self as $unsigned as u128
            }

            fn from_bits(bits: u128) -> Self {
                bits as $unsigned as $t
            }

            fn from_magnitude(magnitude: u128, negative: bool) -> Option<Self> {
                let wide: i128 = if negative {
                    if magnitude == 1u128 << 127 {
                        i128::MIN
                    } else {
                        -(i128::try_from(magnitude).ok()?)
                    }
                } else {
                    i128::try_from(magnitude).ok()?
                };
                <$t>::try_from(wide).ok()
            }
        }
    };
    (unsigned $t:ty, $code:expr) => {
        impl sealed::Sealed for $t {}

        impl PrimitiveInteger for $t {
            const TYPE_CODE: TypeCode = $code;
            const SIGNED: bool = false;
            const BYTES: usize = std::mem::size_of::<$t>();

            fn into_scalar(self) -> Scalar {
                Scalar::Unsigned(self as u128)
            }

            fn to_bits(self) -> u128 {
                self as u128
            }

            fn from_bits(bits: u128) -> Self {
                bits as $t
            }

            fn from_magnitude(magnitude: u128, negative: bool) -> Option<Self> {
                if negative && magnitude != 0 {
                    return None;
                }
                <$t>::try_from(magnitude).ok()
            }
        }
    };
}

primitive_integer!(signed i8, u8, TypeCode::I8);
primitive_integer!(signed i16, u16, TypeCode::I16);
primitive_integer!(signed i32, u32, TypeCode::I32);
primitive_integer!(signed i64, u64, TypeCode::I64);
primitive_integer!(signed i128, u128, TypeCode::I128);
primitive_integer!(signed isize, usize, TypeCode::Object);
primitive_integer!(unsigned u8, TypeCode::U8);
primitive_integer!(unsigned u16, TypeCode::U16);
primitive_integer!(unsigned u32, TypeCode::U32);
primitive_integer!(unsigned u64, TypeCode::U64);
primitive_integer!(unsigned u128, TypeCode::U128);
primitive_integer!(unsigned usize, TypeCode::Object);

/// Adapter for [`PrimitiveInteger`] types
///
/// Addition, subtraction, multiplication and negation wrap on overflow. Division
/// and remainder by zero fail with `DivideByZero`; `MIN / -1`, `MIN % -1` and
/// `abs(MIN)` fail with `Overflow`. Shift counts are masked to the bit width.
pub struct IntegerOperations<T>(PhantomData<fn() -> T>);

impl<T> IntegerOperations<T> {
    /// Create the adapter
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IntegerOperations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IntegerOperations<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerOperations<{}>", std::any::type_name::<T>())
    }
}

impl<T: PrimitiveInteger> NumericOperations<T> for IntegerOperations<T> {
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
        if !T::SIGNED {
            return Err(Error::unsupported_operation::<T>("minus_one"));
        }
        Ok(T::zero().wrapping_sub(&T::one()))
    }

    fn max_value(&self) -> Result<T> {
        Ok(T::max_value())
    }

    fn min_value(&self) -> Result<T> {
        Ok(T::min_value())
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
        left.cmp(right)
    }

    fn add(&self, left: &T, right: &T) -> Result<T> {
        Ok(left.wrapping_add(right))
    }

    fn subtract(&self, left: &T, right: &T) -> Result<T> {
        Ok(left.wrapping_sub(right))
    }

    fn multiply(&self, left: &T, right: &T) -> Result<T> {
        Ok(left.wrapping_mul(right))
    }

    fn divide(&self, dividend: &T, divisor: &T) -> Result<T> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<T>());
        }
        dividend
            .checked_div(divisor)
            .ok_or_else(Error::out_of_range::<T>)
    }

    fn remainder(&self, dividend: &T, divisor: &T) -> Result<T> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero::<T>());
        }
        dividend
            .checked_rem(divisor)
            .ok_or_else(Error::out_of_range::<T>)
    }

    fn negate(&self, value: &T) -> Result<T> {
        if !T::SIGNED {
            return Err(Error::unsupported_operation::<T>("negate"));
        }
        Ok(value.wrapping_neg())
    }

    fn abs(&self, value: &T) -> Result<T> {
        if *value >= T::zero() {
            return Ok(*value);
        }
        value.checked_neg().ok_or_else(Error::out_of_range::<T>)
    }

    fn sign(&self, value: &T) -> Result<i32> {
        Ok(match value.cmp(&T::zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    fn bitwise_and(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left & *right)
    }

    fn bitwise_or(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left | *right)
    }

    fn xor(&self, left: &T, right: &T) -> Result<T> {
        Ok(*left ^ *right)
    }

    fn ones_complement(&self, value: &T) -> Result<T> {
        Ok(!*value)
    }

    fn left_shift(&self, value: &T, shift: i32) -> Result<T> {
        // wrapping_shl masks the count to the bit width
        Ok(value.wrapping_shl(shift as u32))
    }

    fn right_shift(&self, value: &T, shift: i32) -> Result<T> {
        Ok(value.wrapping_shr(shift as u32))
    }

    fn is_even(&self, value: &T) -> Result<bool> {
        Ok((*value & T::one()).is_zero())
    }

    fn is_odd(&self, value: &T) -> Result<bool> {
        Ok(!(*value & T::one()).is_zero())
    }

    fn is_power_of_two(&self, value: &T) -> Result<bool> {
        Ok(*value > T::zero() && value.count_ones() == 1)
    }

    fn floor(&self, value: &T) -> Result<T> {
        Ok(*value)
    }

    fn ceiling(&self, value: &T) -> Result<T> {
        Ok(*value)
    }

    fn truncate(&self, value: &T) -> Result<T> {
        Ok(*value)
    }

    fn round(&self, value: &T, _digits: i32, _mode: MidpointRounding) -> Result<T> {
        Ok(*value)
    }

    fn max(&self, left: &T, right: &T) -> T {
        (*left).max(*right)
    }

    fn min(&self, left: &T, right: &T) -> T {
        (*left).min(*right)
    }

    fn to_scalar(&self, value: &T) -> Scalar {
        value.into_scalar()
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<T> {
        if scalar.is_absent() {
            return Ok(T::zero());
        }
        scalar.into_integer()
    }

    fn format(&self, value: &T, format: Option<&str>, culture: &Culture) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        if spec.kind == FormatKind::Hex {
            return Ok(render::render_hex(&format!("{:X}", value.to_bits()), &spec));
        }
        render::render(&DecimalDigits::from_plain(&value.to_string()), &spec, culture)
    }

    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<T> {
        let styles = styles.unwrap_or(NumberStyles::INTEGER);
        match text::scan(text, styles, culture)? {
            ParsedNumber::Hex(digits) => Ok(T::from_bits(text::hex_bits(&digits, T::BYTES)?)),
            ParsedNumber::Decimal(digits) => {
                let integral = digits.integral_digits()?;
                let magnitude: u128 = integral.parse().map_err(|_| Error::out_of_range::<T>())?;
                T::from_magnitude(magnitude, digits.negative).ok_or_else(Error::out_of_range::<T>)
            }
        }
    }
}
