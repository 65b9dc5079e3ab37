//! The operations contract
//!
//! [`NumericOperations<T>`] is the single interface every numeric kind is reached
//! through. An implementation is a stateless, shareable adapter for one concrete
//! type; callers never see the type's native API.
//!
//! ## Capabilities
//!
//! Not every kind supports every operation. Optional capabilities come with a
//! default body that fails with `UnsupportedOperation`, so an adapter only
//! overrides what its type can do:
//!
//! | Capability | Default |
//! |------------|---------|
//! | `minus_one`, `max_value`, `min_value`, `negate` | unsupported |
//! | bitwise operations and shifts | unsupported |
//! | `is_even`, `is_odd`, `is_power_of_two` | unsupported |
//! | `not_equals`, `greater_than`, `greater_or_equal` | derived from `equals` / `less_than` / `less_or_equal` |
//! | `div_rem` | `divide` then `remainder` |
//! | `clamp` | `min(max(value, low), high)` after checking `low <= high` |
//! | `try_format`, `try_parse` | derived from `format` / `parse` |

use std::cmp::Ordering;

use crate::culture::Culture;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::styles::NumberStyles;
use crate::types::{MidpointRounding, TypeCode};

/// Uniform arithmetic, comparison, conversion and text operations for `T`
pub trait NumericOperations<T>: Send + Sync + 'static {
    // ==================== Identity ====================

    /// Category tag of `T`
    fn type_code(&self) -> TypeCode;

    /// Additive identity
    fn zero(&self) -> Result<T>;

    /// Multiplicative identity
    fn one(&self) -> Result<T>;

    /// Negative one; unsupported for unsigned kinds
    fn minus_one(&self) -> Result<T> {
        Err(Error::unsupported_operation::<T>("minus_one"))
    }

    /// Largest finite value; unsupported for unbounded kinds
    fn max_value(&self) -> Result<T> {
        Err(Error::unsupported_operation::<T>("max_value"))
    }

    /// Smallest finite value; unsupported for unbounded kinds
    fn min_value(&self) -> Result<T> {
        Err(Error::unsupported_operation::<T>("min_value"))
    }

    // ==================== Comparison ====================

    /// `left == right`
    fn equals(&self, left: &T, right: &T) -> bool;

    /// `left != right`
    fn not_equals(&self, left: &T, right: &T) -> bool {
        !self.equals(left, right)
    }

    /// `left < right`
    fn less_than(&self, left: &T, right: &T) -> bool;

    /// `left <= right`
    fn less_or_equal(&self, left: &T, right: &T) -> bool;

    /// `left > right`
    fn greater_than(&self, left: &T, right: &T) -> bool {
        self.less_than(right, left)
    }

    /// `left >= right`
    fn greater_or_equal(&self, left: &T, right: &T) -> bool {
        self.less_or_equal(right, left)
    }

    /// Total order consistent with the native comparison
    fn compare(&self, left: &T, right: &T) -> Ordering;

    // ==================== Arithmetic ====================

    /// `left + right`
    fn add(&self, left: &T, right: &T) -> Result<T>;

    /// `left - right`
    fn subtract(&self, left: &T, right: &T) -> Result<T>;

    /// `left * right`
    fn multiply(&self, left: &T, right: &T) -> Result<T>;

    /// `dividend / divisor`
    fn divide(&self, dividend: &T, divisor: &T) -> Result<T>;

    /// `dividend % divisor`
    fn remainder(&self, dividend: &T, divisor: &T) -> Result<T>;

    /// Quotient and remainder in one call
    fn div_rem(&self, dividend: &T, divisor: &T) -> Result<(T, T)> {
        Ok((
            self.divide(dividend, divisor)?,
            self.remainder(dividend, divisor)?,
        ))
    }

    /// `-value`; unsupported for unsigned kinds
    fn negate(&self, _value: &T) -> Result<T> {
        Err(Error::unsupported_operation::<T>("negate"))
    }

    /// Absolute value
    fn abs(&self, value: &T) -> Result<T>;

    /// `-1`, `0` or `1`
    fn sign(&self, value: &T) -> Result<i32>;

    // ==================== Bitwise ====================

    /// `left & right`
    fn bitwise_and(&self, _left: &T, _right: &T) -> Result<T> {
        Err(Error::unsupported_operation::<T>("bitwise_and"))
    }

    /// `left | right`
    fn bitwise_or(&self, _left: &T, _right: &T) -> Result<T> {
        Err(Error::unsupported_operation::<T>("bitwise_or"))
    }

    /// `left ^ right`
    fn xor(&self, _left: &T, _right: &T) -> Result<T> {
        Err(Error::unsupported_operation::<T>("xor"))
    }

    /// `!value`
    fn ones_complement(&self, _value: &T) -> Result<T> {
        Err(Error::unsupported_operation::<T>("ones_complement"))
    }

    /// `value << shift`
    fn left_shift(&self, _value: &T, _shift: i32) -> Result<T> {
        Err(Error::unsupported_operation::<T>("left_shift"))
    }

    /// `value >> shift`, arithmetic for signed kinds
    fn right_shift(&self, _value: &T, _shift: i32) -> Result<T> {
        Err(Error::unsupported_operation::<T>("right_shift"))
    }

    // ==================== Predicates ====================

    /// True if `value` is divisible by two
    fn is_even(&self, _value: &T) -> Result<bool> {
        Err(Error::unsupported_operation::<T>("is_even"))
    }

    /// True if `value` is not divisible by two
    fn is_odd(&self, _value: &T) -> Result<bool> {
        Err(Error::unsupported_operation::<T>("is_odd"))
    }

    /// True if `value` is a positive power of two
    fn is_power_of_two(&self, _value: &T) -> Result<bool> {
        Err(Error::unsupported_operation::<T>("is_power_of_two"))
    }

    // ==================== Rounding ====================

    /// Largest integral value `<= value`
    fn floor(&self, value: &T) -> Result<T>;

    /// Smallest integral value `>= value`
    fn ceiling(&self, value: &T) -> Result<T>;

    /// Integral part of `value`
    fn truncate(&self, value: &T) -> Result<T>;

    /// Round to `digits` fractional digits under `mode`
    fn round(&self, value: &T, digits: i32, mode: MidpointRounding) -> Result<T>;

    // ==================== Range ====================

    /// Larger of two values
    fn max(&self, left: &T, right: &T) -> T;

    /// Smaller of two values
    fn min(&self, left: &T, right: &T) -> T;

    /// Restrict `value` to `[low, high]`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `low > high`.
    fn clamp(&self, value: &T, low: &T, high: &T) -> Result<T> {
        if self.greater_than(low, high) {
            return Err(Error::invalid_argument(
                "clamp minimum cannot be greater than maximum",
            ));
        }
        let raised = self.max(value, low);
        Ok(self.min(&raised, high))
    }

    // ==================== Conversion ====================

    /// Lower `value` into the conversion pivot
    fn to_scalar(&self, value: &T) -> Scalar;

    /// Build a value from the conversion pivot
    ///
    /// # Errors
    ///
    /// `Overflow` if the pivot lies outside `T`'s range.
    fn from_scalar(&self, scalar: Scalar) -> Result<T>;

    // ==================== Text ====================

    /// Render `value` under `format` (`None` is general)
    fn format(&self, value: &T, format: Option<&str>, culture: &Culture) -> Result<String>;

    /// Render into `dest`, returning the bytes written
    ///
    /// Returns `None` if formatting fails or `dest` is too small; nothing is
    /// written in that case.
    fn try_format(
        &self,
        value: &T,
        dest: &mut [u8],
        format: Option<&str>,
        culture: &Culture,
    ) -> Option<usize> {
        let text = self.format(value, format, culture).ok()?;
        let bytes = text.as_bytes();
        let slot = dest.get_mut(..bytes.len())?;
        slot.copy_from_slice(bytes);
        Some(bytes.len())
    }

    /// Parse `text` under `styles` (`None` selects the kind's default styles)
    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<T>;

    /// Parse, or `None` on any failure
    fn try_parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Option<T> {
        self.parse(text, styles, culture).ok()
    }
}
