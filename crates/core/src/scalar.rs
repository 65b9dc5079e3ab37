//! Conversion pivot
//!
//! Conversions between numeric types never go through a hard-coded type list.
//! Each adapter lowers its value into a [`Scalar`] (the widest lossless carrier
//! for its kind) and builds values back from any `Scalar`, checking the target's
//! range. Fractional sources truncate toward zero into integral targets.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, NumCast, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Kind-preserving carrier of a numeric value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// The absent state of an optional value
    Absent,
    /// Any signed fixed-width integer
    Signed(i128),
    /// Any unsigned fixed-width integer
    Unsigned(u128),
    /// Any binary floating-point value
    Float(f64),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// Arbitrary-precision integer
    Big(BigInt),
}

impl Scalar {
    /// True for [`Scalar::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Scalar::Absent)
    }

    /// Narrow into a fixed-width integral type
    ///
    /// Fractional values truncate toward zero. Fails with `Overflow` when the
    /// (truncated) value is outside `T`'s range, or is NaN/infinite.
    pub fn into_integer<T: NumCast>(self) -> Result<T> {
        <T as NumCast>::from(self).ok_or_else(Error::out_of_range::<T>)
    }

    /// Convert into an `f64`
    ///
    /// Float sources pass through unchanged (NaN and infinities included). Any
    /// other source that cannot be represented as a finite `f64` overflows.
    pub fn into_f64(self) -> Result<f64> {
        match self {
            Scalar::Float(v) => Ok(v),
            other => match other.to_f64() {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(Error::out_of_range::<f64>()),
            },
        }
    }

    /// Convert into an `f32`
    ///
    /// Finite values beyond `f32`'s range overflow; NaN and infinities pass through.
    pub fn into_f32(self) -> Result<f32> {
        let v = self.into_f64()?;
        if v.is_finite() && v.abs() > <f64 as From<f32>>::from(f32::MAX) {
            return Err(Error::out_of_range::<f32>());
        }
        Ok(v as f32)
    }

    /// Convert into a [`Decimal`]
    pub fn into_decimal(self) -> Result<Decimal> {
        let converted = match self {
            Scalar::Absent => Some(Decimal::ZERO),
            Scalar::Signed(v) => Decimal::from_i128(v),
            Scalar::Unsigned(v) => Decimal::from_u128(v),
            Scalar::Float(v) => Decimal::from_f64(v),
            Scalar::Decimal(v) => Some(v),
            Scalar::Big(v) => v.to_i128().and_then(Decimal::from_i128),
        };
        converted.ok_or_else(Error::out_of_range::<Decimal>)
    }

    /// Convert into a [`BigInt`]
    ///
    /// Never overflows for finite sources.
    pub fn into_big(self) -> Result<BigInt> {
        match self {
            Scalar::Absent => Ok(BigInt::from(0)),
            Scalar::Signed(v) => Ok(BigInt::from(v)),
            Scalar::Unsigned(v) => Ok(BigInt::from(v)),
            Scalar::Float(v) => {
                BigInt::from_f64(v.trunc()).ok_or_else(Error::out_of_range::<BigInt>)
            }
            Scalar::Decimal(v) => v
                .trunc()
                .to_i128()
                .map(BigInt::from)
                .ok_or_else(Error::out_of_range::<BigInt>),
            Scalar::Big(v) => Ok(v),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Absent => f.write_str("<absent>"),
            Scalar::Signed(v) => write!(f, "{}", v),
            Scalar::Unsigned(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Decimal(v) => write!(f, "{}", v),
            Scalar::Big(v) => write!(f, "{}", v),
        }
    }
}

impl ToPrimitive for Scalar {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Scalar::Absent => None,
            Scalar::Signed(v) => v.to_i64(),
            Scalar::Unsigned(v) => v.to_i64(),
            Scalar::Float(v) => v.to_i64(),
            Scalar::Decimal(v) => v.trunc().to_i64(),
            Scalar::Big(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Scalar::Absent => None,
            Scalar::Signed(v) => v.to_u64(),
            Scalar::Unsigned(v) => v.to_u64(),
            Scalar::Float(v) => v.to_u64(),
            Scalar::Decimal(v) => v.trunc().to_u64(),
            Scalar::Big(v) => v.to_u64(),
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match self {
            Scalar::Absent => None,
            Scalar::Signed(v) => Some(*v),
            Scalar::Unsigned(v) => v.to_i128(),
            Scalar::Float(v) => v.to_i128(),
            Scalar::Decimal(v) => v.trunc().to_i128(),
            Scalar::Big(v) => v.to_i128(),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self {
            Scalar::Absent => None,
            Scalar::Signed(v) => v.to_u128(),
            Scalar::Unsigned(v) => Some(*v),
            Scalar::Float(v) => v.to_u128(),
            Scalar::Decimal(v) => v.trunc().to_u128(),
            Scalar::Big(v) => v.to_u128(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Absent => None,
            Scalar::Signed(v) => v.to_f64(),
            Scalar::Unsigned(v) => v.to_f64(),
            Scalar::Float(v) => Some(*v),
            Scalar::Decimal(v) => v.to_f64(),
            Scalar::Big(v) => v.to_f64(),
        }
    }
}
