//! Enum adapter
//!
//! Numeric enums are open newtypes over an integral representation with a set
//! of named members, declared with [`numeric_enum!`](crate::numeric_enum):
//!
//! ```ignore
//! numeric_enum! {
//!     pub struct DayOfWeek(i32) {
//!         Sunday = 0,
//!         Monday = 1,
//!     }
//! }
//! ```
//!
//! Any value of the representation is a valid enum value, named or not. The
//! adapter converts to the representation, delegates to its adapter and converts
//! back, so the failure rules are exactly those of the representation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use polynum_core::{
    Culture, Error, ErrorKind, FormatKind, FormatSpec, MidpointRounding, NumberStyles,
    NumericOperations, Result, Scalar, TypeCode,
};

use crate::numeric::{Numeric, SharedOperations};
use crate::registry::OperationsRegistry;

/// An open enum over an integral representation
pub trait NumericEnum: Numeric + Copy {
    /// Underlying integral type
    type Repr: Numeric + Copy + PartialEq;

    /// The underlying value
    fn to_repr(self) -> Self::Repr;

    /// Wrap an underlying value; every value is accepted
    fn from_repr(repr: Self::Repr) -> Self;

    /// Named members in declaration order
    fn members() -> &'static [(&'static str, Self::Repr)];

    /// Name of the first member with this value, if any
    fn name(self) -> Option<&'static str> {
        let repr = self.to_repr();
        Self::members()
            .iter()
            .find(|(_, value)| *value == repr)
            .map(|(name, _)| *name)
    }
}

/// Adapter for a [`NumericEnum`], delegating to its representation's adapter
pub struct EnumOperations<E: NumericEnum> {
    inner: SharedOperations<E::Repr>,
}

impl<E: NumericEnum> EnumOperations<E> {
    /// Wrap the representation's adapter
    pub fn new(inner: SharedOperations<E::Repr>) -> Self {
        Self { inner }
    }

    /// Build the adapter, resolving the representation through `registry`
    pub fn resolve(registry: &OperationsRegistry) -> Result<SharedOperations<E>> {
        let inner = registry.resolve::<E::Repr>()?;
        Ok(Arc::new(Self::new(inner)))
    }

    fn map(&self, result: Result<E::Repr>) -> Result<E> {
        result.map(E::from_repr)
    }
}

impl<E: NumericEnum> fmt::Debug for EnumOperations<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumOperations<{}>", std::any::type_name::<E>())
    }
}

impl<E: NumericEnum> NumericOperations<E> for EnumOperations<E> {
    fn type_code(&self) -> TypeCode {
        self.inner.type_code()
    }

    fn zero(&self) -> Result<E> {
        self.map(self.inner.zero())
    }

    fn one(&self) -> Result<E> {
        self.map(self.inner.one())
    }

    fn minus_one(&self) -> Result<E> {
        self.map(self.inner.minus_one())
    }

    fn max_value(&self) -> Result<E> {
        self.map(self.inner.max_value())
    }

    fn min_value(&self) -> Result<E> {
        self.map(self.inner.min_value())
    }

    fn equals(&self, left: &E, right: &E) -> bool {
        self.inner.equals(&left.to_repr(), &right.to_repr())
    }

    fn not_equals(&self, left: &E, right: &E) -> bool {
        self.inner.not_equals(&left.to_repr(), &right.to_repr())
    }

    fn less_than(&self, left: &E, right: &E) -> bool {
        self.inner.less_than(&left.to_repr(), &right.to_repr())
    }

    fn less_or_equal(&self, left: &E, right: &E) -> bool {
        self.inner.less_or_equal(&left.to_repr(), &right.to_repr())
    }

    fn greater_than(&self, left: &E, right: &E) -> bool {
        self.inner.greater_than(&left.to_repr(), &right.to_repr())
    }

    fn greater_or_equal(&self, left: &E, right: &E) -> bool {
        self.inner.greater_or_equal(&left.to_repr(), &right.to_repr())
    }

    fn compare(&self, left: &E, right: &E) -> Ordering {
        self.inner.compare(&left.to_repr(), &right.to_repr())
    }

    fn add(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.add(&left.to_repr(), &right.to_repr()))
    }

    fn subtract(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.subtract(&left.to_repr(), &right.to_repr()))
    }

    fn multiply(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.multiply(&left.to_repr(), &right.to_repr()))
    }

    fn divide(&self, dividend: &E, divisor: &E) -> Result<E> {
        self.map(self.inner.divide(&dividend.to_repr(), &divisor.to_repr()))
    }

    fn remainder(&self, dividend: &E, divisor: &E) -> Result<E> {
        self.map(self.inner.remainder(&dividend.to_repr(), &divisor.to_repr()))
    }

    fn div_rem(&self, dividend: &E, divisor: &E) -> Result<(E, E)> {
        let (quotient, remainder) = self
            .inner
            .div_rem(&dividend.to_repr(), &divisor.to_repr())?;
        Ok((E::from_repr(quotient), E::from_repr(remainder)))
    }

    fn negate(&self, value: &E) -> Result<E> {
        self.map(self.inner.negate(&value.to_repr()))
    }

    fn abs(&self, value: &E) -> Result<E> {
        self.map(self.inner.abs(&value.to_repr()))
    }

    fn sign(&self, value: &E) -> Result<i32> {
        self.inner.sign(&value.to_repr())
    }

    fn bitwise_and(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.bitwise_and(&left.to_repr(), &right.to_repr()))
    }

    fn bitwise_or(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.bitwise_or(&left.to_repr(), &right.to_repr()))
    }

    fn xor(&self, left: &E, right: &E) -> Result<E> {
        self.map(self.inner.xor(&left.to_repr(), &right.to_repr()))
    }

    fn ones_complement(&self, value: &E) -> Result<E> {
        self.map(self.inner.ones_complement(&value.to_repr()))
    }

    fn left_shift(&self, value: &E, shift: i32) -> Result<E> {
        self.map(self.inner.left_shift(&value.to_repr(), shift))
    }

    fn right_shift(&self, value: &E, shift: i32) -> Result<E> {
        self.map(self.inner.right_shift(&value.to_repr(), shift))
    }

    fn is_even(&self, value: &E) -> Result<bool> {
        self.inner.is_even(&value.to_repr())
    }

    fn is_odd(&self, value: &E) -> Result<bool> {
        self.inner.is_odd(&value.to_repr())
    }

    fn is_power_of_two(&self, value: &E) -> Result<bool> {
        self.inner.is_power_of_two(&value.to_repr())
    }

    fn floor(&self, value: &E) -> Result<E> {
        self.map(self.inner.floor(&value.to_repr()))
    }

    fn ceiling(&self, value: &E) -> Result<E> {
        self.map(self.inner.ceiling(&value.to_repr()))
    }

    fn truncate(&self, value: &E) -> Result<E> {
        self.map(self.inner.truncate(&value.to_repr()))
    }

    fn round(&self, value: &E, digits: i32, mode: MidpointRounding) -> Result<E> {
        self.map(self.inner.round(&value.to_repr(), digits, mode))
    }

    fn max(&self, left: &E, right: &E) -> E {
        E::from_repr(self.inner.max(&left.to_repr(), &right.to_repr()))
    }

    fn min(&self, left: &E, right: &E) -> E {
        E::from_repr(self.inner.min(&left.to_repr(), &right.to_repr()))
    }

    fn clamp(&self, value: &E, low: &E, high: &E) -> Result<E> {
        self.map(
            self.inner
                .clamp(&value.to_repr(), &low.to_repr(), &high.to_repr()),
        )
    }

    fn to_scalar(&self, value: &E) -> Scalar {
        self.inner.to_scalar(&value.to_repr())
    }

    fn from_scalar(&self, scalar: Scalar) -> Result<E> {
        self.map(self.inner.from_scalar(scalar))
    }

    /// `G` or none renders the member name when defined, `D` the number, `X`
    /// hex padded to twice the representation's byte width
    fn format(&self, value: &E, format: Option<&str>, culture: &Culture) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        let repr = value.to_repr();
        match spec.kind {
            FormatKind::General => match value.name() {
                Some(name) => Ok(name.to_string()),
                None => self.inner.format(&repr, None, culture),
            },
            FormatKind::Decimal => self.inner.format(&repr, format, culture),
            FormatKind::Hex => {
                let width = self.inner.type_code().byte_width().unwrap_or(0) * 2;
                let letter = if spec.uppercase { 'X' } else { 'x' };
                self.inner
                    .format(&repr, Some(&format!("{}{}", letter, width)), culture)
            }
            FormatKind::Number | FormatKind::Fixed | FormatKind::Exponential => Err(Error::format(
                format!("format '{}' is not valid for an enum", format.unwrap_or_default()),
            )),
        }
    }

    /// Exact member names take precedence over numeric text; numeric text is
    /// scanned under `styles` untouched
    fn parse(&self, text: &str, styles: Option<NumberStyles>, culture: &Culture) -> Result<E> {
        let trimmed = text.trim();
        if let Some((_, repr)) = E::members().iter().find(|(name, _)| *name == trimmed) {
            return Ok(E::from_repr(*repr));
        }
        match self.inner.parse(text, styles, culture) {
            Ok(repr) => Ok(E::from_repr(repr)),
            Err(e) if e.kind() == ErrorKind::Format => Err(Error::invalid_argument(format!(
                "requested value '{}' was not found in {}",
                trimmed,
                std::any::type_name::<E>()
            ))),
            Err(e) => Err(e),
        }
    }
}

/// Declare an open numeric enum
///
/// Expands to a `Copy` newtype over the representation, one associated constant
/// per member, and the [`NumericEnum`] and [`Numeric`] impls that route it to
/// [`EnumOperations`].
///
/// ```ignore
/// numeric_enum! {
///     /// Days of the week
///     pub struct DayOfWeek(i32) {
///         Sunday = 0,
///         Monday = 1,
///         Tuesday = 2,
///     }
/// }
///
/// assert_eq!(DayOfWeek::Tuesday.0, 2);
/// assert_eq!(DayOfWeek(-3).name(), None);
/// ```
#[macro_export]
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: $name = $name($value);
            )*
        }

        impl $crate::NumericEnum for $name {
            type Repr = $repr;

            fn to_repr(self) -> $repr {
                self.0
            }

            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }

            fn members() -> &'static [(&'static str, $repr)] {
                &[$((stringify!($member), $value)),*]
            }
        }

        impl $crate::Numeric for $name {
            fn resolution() -> $crate::Resolution<Self> {
                $crate::Resolution::Enum($crate::EnumOperations::<$name>::resolve)
            }
        }
    };
}
