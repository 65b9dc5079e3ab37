//! Static entry points
//!
//! Free functions over plain values, each resolving `T`'s adapter from the
//! global registry and delegating to it. They are the non-façade way in:
//!
//! ```ignore
//! use polynum::{add, clamp, parse, NumberStyles};
//!
//! assert_eq!(add(2i64, 3i64)?, 5);
//! assert_eq!(clamp(8, 2, 5)?, 5);
//! assert_eq!(parse::<u8>(" FF ", Some(NumberStyles::HEX_NUMBER))?, 255);
//! ```
//!
//! Every function fails with `UnsupportedType` when `T` cannot be resolved.

use std::cmp::Ordering;

use polynum_core::{Culture, MidpointRounding, NumberStyles, NumericOperations, Result, TypeCode};
use polynum_engine::{Candidate, Numeric, OperationsRegistry, Provider, SharedOperations, TypeDescriptor};

// ==================== Registry ====================

/// The adapter for `T`
pub fn operations<T: Numeric>() -> Result<SharedOperations<T>> {
    OperationsRegistry::global().resolve::<T>()
}

/// Bind `adapter` as the operations for `T`
///
/// # Errors
///
/// `AlreadyRegistered` if `T` already has an adapter.
pub fn register_operations<T, A>(adapter: A) -> Result<()>
where
    T: Numeric,
    A: NumericOperations<T>,
{
    OperationsRegistry::global().register::<T, A>(adapter)
}

/// Append a provider to the global chain
pub fn register_provider<F>(name: &'static str, select: F)
where
    F: Fn(&TypeDescriptor) -> Option<Candidate> + Send + Sync + 'static,
{
    OperationsRegistry::global().register_provider(Provider::new(name, select));
}

// ==================== Identity ====================

/// Additive identity of `T`
pub fn zero<T: Numeric>() -> Result<T> {
    operations::<T>()?.zero()
}

/// Multiplicative identity of `T`
pub fn one<T: Numeric>() -> Result<T> {
    operations::<T>()?.one()
}

/// Negative one
pub fn minus_one<T: Numeric>() -> Result<T> {
    operations::<T>()?.minus_one()
}

/// Largest value of `T`
pub fn max_value<T: Numeric>() -> Result<T> {
    operations::<T>()?.max_value()
}

/// Smallest value of `T`
pub fn min_value<T: Numeric>() -> Result<T> {
    operations::<T>()?.min_value()
}

/// Category tag of `T`
pub fn type_code<T: Numeric>() -> Result<TypeCode> {
    Ok(operations::<T>()?.type_code())
}

// ==================== Comparison ====================

/// Adapter equality
pub fn equals<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.equals(&left, &right))
}

/// Adapter inequality
pub fn not_equals<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.not_equals(&left, &right))
}

/// `left < right`
pub fn less_than<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.less_than(&left, &right))
}

/// `left <= right`
pub fn less_or_equal<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.less_or_equal(&left, &right))
}

/// `left > right`
pub fn greater_than<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.greater_than(&left, &right))
}

/// `left >= right`
pub fn greater_or_equal<T: Numeric>(left: T, right: T) -> Result<bool> {
    Ok(operations::<T>()?.greater_or_equal(&left, &right))
}

/// Total order
pub fn compare<T: Numeric>(left: T, right: T) -> Result<Ordering> {
    Ok(operations::<T>()?.compare(&left, &right))
}

// ==================== Arithmetic ====================

/// `left + right`
pub fn add<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.add(&left, &right)
}

/// `left - right`
pub fn subtract<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.subtract(&left, &right)
}

/// `left * right`
pub fn multiply<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.multiply(&left, &right)
}

/// `dividend / divisor`
pub fn divide<T: Numeric>(dividend: T, divisor: T) -> Result<T> {
    operations::<T>()?.divide(&dividend, &divisor)
}

/// `dividend % divisor`
pub fn remainder<T: Numeric>(dividend: T, divisor: T) -> Result<T> {
    operations::<T>()?.remainder(&dividend, &divisor)
}

/// Quotient and remainder
pub fn div_rem<T: Numeric>(dividend: T, divisor: T) -> Result<(T, T)> {
    operations::<T>()?.div_rem(&dividend, &divisor)
}

/// `-value`
pub fn negate<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.negate(&value)
}

/// Absolute value
pub fn abs<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.abs(&value)
}

/// `-1`, `0` or `1`
pub fn sign<T: Numeric>(value: T) -> Result<i32> {
    operations::<T>()?.sign(&value)
}

// ==================== Bitwise ====================

/// `left & right`
pub fn bitwise_and<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.bitwise_and(&left, &right)
}

/// `left | right`
pub fn bitwise_or<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.bitwise_or(&left, &right)
}

/// `left ^ right`
pub fn xor<T: Numeric>(left: T, right: T) -> Result<T> {
    operations::<T>()?.xor(&left, &right)
}

/// `!value`
pub fn ones_complement<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.ones_complement(&value)
}

/// `value << shift`
pub fn left_shift<T: Numeric>(value: T, shift: i32) -> Result<T> {
    operations::<T>()?.left_shift(&value, shift)
}

/// `value >> shift`
pub fn right_shift<T: Numeric>(value: T, shift: i32) -> Result<T> {
    operations::<T>()?.right_shift(&value, shift)
}

// ==================== Predicates ====================

/// Divisible by two
pub fn is_even<T: Numeric>(value: T) -> Result<bool> {
    operations::<T>()?.is_even(&value)
}

/// Not divisible by two
pub fn is_odd<T: Numeric>(value: T) -> Result<bool> {
    operations::<T>()?.is_odd(&value)
}

/// Exactly one bit set
pub fn is_power_of_two<T: Numeric>(value: T) -> Result<bool> {
    operations::<T>()?.is_power_of_two(&value)
}

// ==================== Rounding ====================

/// Round toward negative infinity
pub fn floor<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.floor(&value)
}

/// Round toward positive infinity
pub fn ceiling<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.ceiling(&value)
}

/// Round toward zero
pub fn truncate<T: Numeric>(value: T) -> Result<T> {
    operations::<T>()?.truncate(&value)
}

/// Round to `digits` fractional digits under `mode`
pub fn round<T: Numeric>(value: T, digits: i32, mode: MidpointRounding) -> Result<T> {
    operations::<T>()?.round(&value, digits, mode)
}

// ==================== Range ====================

/// The larger value
pub fn max<T: Numeric>(left: T, right: T) -> Result<T> {
    Ok(operations::<T>()?.max(&left, &right))
}

/// The smaller value
pub fn min<T: Numeric>(left: T, right: T) -> Result<T> {
    Ok(operations::<T>()?.min(&left, &right))
}

/// Restrict `value` to `[low, high]`
///
/// # Errors
///
/// `InvalidArgument` if `low > high`.
pub fn clamp<T: Numeric>(value: T, low: T, high: T) -> Result<T> {
    operations::<T>()?.clamp(&value, &low, &high)
}

// ==================== Conversion ====================

/// Convert between any two resolvable types
///
/// # Errors
///
/// `Overflow` if `value` lies outside `T`'s range.
pub fn convert<F: Numeric, T: Numeric>(value: F) -> Result<T> {
    let source = operations::<F>()?;
    let target = operations::<T>()?;
    target.from_scalar(source.to_scalar(&value))
}

// ==================== Text ====================

/// Render with the invariant culture
pub fn to_string<T: Numeric>(value: T, format: Option<&str>) -> Result<String> {
    to_string_with(value, format, &Culture::default())
}

/// Render under `culture`
pub fn to_string_with<T: Numeric>(value: T, format: Option<&str>, culture: &Culture) -> Result<String> {
    operations::<T>()?.format(&value, format, culture)
}

/// Render into `dest`, returning the bytes written or `None`
pub fn try_format<T: Numeric>(
    value: T,
    dest: &mut [u8],
    format: Option<&str>,
    culture: &Culture,
) -> Option<usize> {
    operations::<T>().ok()?.try_format(&value, dest, format, culture)
}

/// Parse with the invariant culture
pub fn parse<T: Numeric>(text: &str, styles: Option<NumberStyles>) -> Result<T> {
    parse_with(text, styles, &Culture::default())
}

/// Parse under `culture`
pub fn parse_with<T: Numeric>(text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<T> {
    operations::<T>()?.parse(text, styles, culture)
}

/// Parse with the invariant culture, `None` on any failure
pub fn try_parse<T: Numeric>(text: &str, styles: Option<NumberStyles>) -> Option<T> {
    try_parse_with(text, styles, &Culture::default())
}

/// Parse under `culture`, `None` on any failure
pub fn try_parse_with<T: Numeric>(
    text: &str,
    styles: Option<NumberStyles>,
    culture: &Culture,
) -> Option<T> {
    operations::<T>().ok()?.try_parse(text, styles, culture)
}
