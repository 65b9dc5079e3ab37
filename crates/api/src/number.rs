//! `Number<T>` façade
//!
//! A value paired with its type's adapter. Every method and operator goes
//! through the adapter, so the same code works for any resolvable `T`:
//!
//! ```ignore
//! let a = Number::create(7i32)?;
//! let b = Number::create(2i32)?;
//! assert_eq!((&a + &b)?.into_value(), 9);
//! assert_eq!((a % 4)?.into_value(), 3);
//! ```
//!
//! Operators return `Result<Number<T>>` and never mix distinct `T`s; use
//! [`Number::to`] to convert first.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use polynum_core::{Culture, MidpointRounding, NumberStyles, Result, TypeCode};
use polynum_engine::{Numeric, OperationsRegistry, SharedOperations};

/// A numeric value with its resolved operations
#[derive(Clone)]
pub struct Number<T> {
    value: T,
    ops: SharedOperations<T>,
}

impl<T: Numeric> Number<T> {
    /// Wrap `value`, resolving `T`'s adapter from the global registry
    ///
    /// # Errors
    ///
    /// `UnsupportedType` if `T` has no adapter.
    pub fn create(value: T) -> Result<Self> {
        Self::create_in(OperationsRegistry::global(), value)
    }

    /// Wrap `value`, resolving `T`'s adapter from `registry`
    pub fn create_in(registry: &OperationsRegistry, value: T) -> Result<Self> {
        let ops = registry.resolve::<T>()?;
        Ok(Self { value, ops })
    }

    fn with(&self, value: T) -> Self {
        Self {
            value,
            ops: self.ops.clone(),
        }
    }

    fn identity(make: impl FnOnce(&SharedOperations<T>) -> Result<T>) -> Result<Self> {
        let ops = OperationsRegistry::global().resolve::<T>()?;
        let value = make(&ops)?;
        Ok(Self { value, ops })
    }

    /// The wrapped value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwrap the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// The adapter in use
    pub fn operations(&self) -> &SharedOperations<T> {
        &self.ops
    }

    /// Category tag of `T`
    pub fn type_code(&self) -> TypeCode {
        self.ops.type_code()
    }

    // ==================== Identity ====================

    /// Additive identity
    pub fn zero() -> Result<Self> {
        Self::identity(|ops| ops.zero())
    }

    /// Multiplicative identity
    pub fn one() -> Result<Self> {
        Self::identity(|ops| ops.one())
    }

    /// Negative one
    pub fn minus_one() -> Result<Self> {
        Self::identity(|ops| ops.minus_one())
    }

    /// Largest value
    pub fn max_value() -> Result<Self> {
        Self::identity(|ops| ops.max_value())
    }

    /// Smallest value
    pub fn min_value() -> Result<Self> {
        Self::identity(|ops| ops.min_value())
    }

    // ==================== Comparison ====================

    /// Total order between two values
    pub fn compare(&self, other: &Self) -> Ordering {
        self.ops.compare(&self.value, &other.value)
    }

    /// Adapter equality
    pub fn equals(&self, other: &Self) -> bool {
        self.ops.equals(&self.value, &other.value)
    }

    /// Strictly less
    pub fn less_than(&self, other: &Self) -> bool {
        self.ops.less_than(&self.value, &other.value)
    }

    /// Less or equal
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.ops.less_or_equal(&self.value, &other.value)
    }

    /// Strictly greater
    pub fn greater_than(&self, other: &Self) -> bool {
        self.ops.greater_than(&self.value, &other.value)
    }

    /// Greater or equal
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.ops.greater_or_equal(&self.value, &other.value)
    }

    // ==================== Arithmetic ====================

    /// `self + other`
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.add(&self.value, &other.value)?))
    }

    /// `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.subtract(&self.value, &other.value)?))
    }

    /// `self * other`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.multiply(&self.value, &other.value)?))
    }

    /// `self / other`
    pub fn divide(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.divide(&self.value, &other.value)?))
    }

    /// `self % other`
    pub fn remainder(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.remainder(&self.value, &other.value)?))
    }

    /// Quotient and remainder
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        let (quotient, remainder) = self.ops.div_rem(&self.value, &other.value)?;
        Ok((self.with(quotient), self.with(remainder)))
    }

    /// `-self`
    pub fn negate(&self) -> Result<Self> {
        Ok(self.with(self.ops.negate(&self.value)?))
    }

    /// Absolute value
    pub fn abs(&self) -> Result<Self> {
        Ok(self.with(self.ops.abs(&self.value)?))
    }

    /// `-1`, `0` or `1` (`-2` for an absent value)
    pub fn sign(&self) -> Result<i32> {
        self.ops.sign(&self.value)
    }

    // ==================== Bitwise ====================

    /// `self & other`
    pub fn bitwise_and(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.bitwise_and(&self.value, &other.value)?))
    }

    /// `self | other`
    pub fn bitwise_or(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.bitwise_or(&self.value, &other.value)?))
    }

    /// `self ^ other`
    pub fn xor(&self, other: &Self) -> Result<Self> {
        Ok(self.with(self.ops.xor(&self.value, &other.value)?))
    }

    /// `!self`
    pub fn ones_complement(&self) -> Result<Self> {
        Ok(self.with(self.ops.ones_complement(&self.value)?))
    }

    /// `self << shift`
    pub fn left_shift(&self, shift: i32) -> Result<Self> {
        Ok(self.with(self.ops.left_shift(&self.value, shift)?))
    }

    /// `self >> shift`
    pub fn right_shift(&self, shift: i32) -> Result<Self> {
        Ok(self.with(self.ops.right_shift(&self.value, shift)?))
    }

    // ==================== Predicates ====================

    /// Divisible by two
    pub fn is_even(&self) -> Result<bool> {
        self.ops.is_even(&self.value)
    }

    /// Not divisible by two
    pub fn is_odd(&self) -> Result<bool> {
        self.ops.is_odd(&self.value)
    }

    /// Exactly one bit set
    pub fn is_power_of_two(&self) -> Result<bool> {
        self.ops.is_power_of_two(&self.value)
    }

    // ==================== Rounding ====================

    /// Round toward negative infinity
    pub fn floor(&self) -> Result<Self> {
        Ok(self.with(self.ops.floor(&self.value)?))
    }

    /// Round toward positive infinity
    pub fn ceiling(&self) -> Result<Self> {
        Ok(self.with(self.ops.ceiling(&self.value)?))
    }

    /// Round toward zero
    pub fn truncate(&self) -> Result<Self> {
        Ok(self.with(self.ops.truncate(&self.value)?))
    }

    /// Round to `digits` fractional digits
    pub fn round(&self, digits: i32, mode: MidpointRounding) -> Result<Self> {
        Ok(self.with(self.ops.round(&self.value, digits, mode)?))
    }

    // ==================== Range ====================

    /// The larger of two values
    pub fn max(&self, other: &Self) -> Self {
        self.with(self.ops.max(&self.value, &other.value))
    }

    /// The smaller of two values
    pub fn min(&self, other: &Self) -> Self {
        self.with(self.ops.min(&self.value, &other.value))
    }

    /// Restrict to `[low, high]`
    pub fn clamp(&self, low: &Self, high: &Self) -> Result<Self> {
        Ok(self.with(self.ops.clamp(&self.value, &low.value, &high.value)?))
    }

    // ==================== Conversion & Text ====================

    /// Convert to another resolvable type
    ///
    /// # Errors
    ///
    /// `UnsupportedType` if `U` has no adapter, `Overflow` if the value does not
    /// fit.
    pub fn to<U: Numeric>(&self) -> Result<Number<U>> {
        let target = OperationsRegistry::global().resolve::<U>()?;
        let value = target.from_scalar(self.ops.to_scalar(&self.value))?;
        Ok(Number { value, ops: target })
    }

    /// Render under `format` with the invariant culture
    pub fn format(&self, format: Option<&str>) -> Result<String> {
        self.ops.format(&self.value, format, &Culture::default())
    }

    /// Render under `format` and `culture`
    pub fn format_with(&self, format: Option<&str>, culture: &Culture) -> Result<String> {
        self.ops.format(&self.value, format, culture)
    }

    /// Parse `text` with the invariant culture
    pub fn parse(text: &str, styles: Option<NumberStyles>) -> Result<Self> {
        Self::parse_with(text, styles, &Culture::default())
    }

    /// Parse `text` under `culture`
    pub fn parse_with(text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<Self> {
        Self::identity(|ops| ops.parse(text, styles, culture))
    }
}

// ==================== Operators ====================

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: Numeric> $trait for Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, rhs: Number<T>) -> Self::Output {
                Number::$op(&self, &rhs)
            }
        }

        impl<'a, T: Numeric> $trait<&'a Number<T>> for &'a Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, rhs: &'a Number<T>) -> Self::Output {
                Number::$op(self, rhs)
            }
        }

        impl<T: Numeric> $trait<T> for Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, rhs: T) -> Self::Output {
                let rhs = self.with(rhs);
                Number::$op(&self, &rhs)
            }
        }

        impl<'a, T: Numeric> $trait<T> for &'a Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, rhs: T) -> Self::Output {
                let rhs = self.with(rhs);
                Number::$op(self, &rhs)
            }
        }
    };
}

binary_operator!(Add, add, add);
binary_operator!(Sub, sub, subtract);
binary_operator!(Mul, mul, multiply);
binary_operator!(Div, div, divide);
binary_operator!(Rem, rem, remainder);
binary_operator!(BitAnd, bitand, bitwise_and);
binary_operator!(BitOr, bitor, bitwise_or);
binary_operator!(BitXor, bitxor, xor);

macro_rules! unary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: Numeric> $trait for Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self) -> Self::Output {
                Number::$op(&self)
            }
        }

        impl<'a, T: Numeric> $trait for &'a Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self) -> Self::Output {
                Number::$op(self)
            }
        }
    };
}

unary_operator!(Neg, neg, negate);
unary_operator!(Not, not, ones_complement);

macro_rules! shift_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: Numeric> $trait<i32> for Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, shift: i32) -> Self::Output {
                Number::$op(&self, shift)
            }
        }

        impl<'a, T: Numeric> $trait<i32> for &'a Number<T> {
            type Output = Result<Number<T>>;

            fn $method(self, shift: i32) -> Self::Output {
                Number::$op(self, shift)
            }
        }
    };
}

shift_operator!(Shl, shl, left_shift);
shift_operator!(Shr, shr, right_shift);

// ==================== Comparison Traits ====================

impl<T: Numeric> PartialEq for Number<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ops.equals(&self.value, &other.value)
    }
}

impl<T: Numeric> PartialEq<T> for Number<T> {
    fn eq(&self, other: &T) -> bool {
        self.ops.equals(&self.value, other)
    }
}

impl<T: Numeric> PartialOrd for Number<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ops.equals(&self.value, &other.value) {
            Some(Ordering::Equal)
        } else if self.ops.less_than(&self.value, &other.value) {
            Some(Ordering::Less)
        } else if self.ops.greater_than(&self.value, &other.value) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    // Ordering operators use the adapter's predicates, so an absent operand is never ordered
    fn lt(&self, other: &Self) -> bool {
        self.ops.less_than(&self.value, &other.value)
    }

    fn le(&self, other: &Self) -> bool {
        self.ops.less_or_equal(&self.value, &other.value)
    }

    fn gt(&self, other: &Self) -> bool {
        self.ops.greater_than(&self.value, &other.value)
    }

    fn ge(&self, other: &Self) -> bool {
        self.ops.greater_or_equal(&self.value, &other.value)
    }
}

impl<T: Numeric> fmt::Display for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .ops
            .format(&self.value, None, &Culture::default())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<T: fmt::Debug> fmt::Debug for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Number").field(&self.value).finish()
    }
}
