//! Small shared value types
//!
//! - [`TypeCode`]: coarse classification of a numeric type
//! - [`MidpointRounding`]: tie-breaking rule for `round`

use std::fmt;

/// Coarse category tag of a numeric type
///
/// Callers use this for cheap classification without reflection. Kinds with no
/// fixed-width primitive counterpart (`BigInt`, the platform-width integers)
/// report [`TypeCode::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCode {
    /// No primitive counterpart
    Object,
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `u16`
    U16,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
    /// `i128`
    I128,
    /// `u128`
    U128,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Fixed-point decimal
    Decimal,
}

impl TypeCode {
    /// Width in bytes of fixed-width integral codes
    pub fn byte_width(self) -> Option<usize> {
        match self {
            TypeCode::I8 | TypeCode::U8 => Some(1),
            TypeCode::I16 | TypeCode::U16 => Some(2),
            TypeCode::I32 | TypeCode::U32 => Some(4),
            TypeCode::I64 | TypeCode::U64 => Some(8),
            TypeCode::I128 | TypeCode::U128 => Some(16),
            TypeCode::Object | TypeCode::F32 | TypeCode::F64 | TypeCode::Decimal => None,
        }
    }

    /// True for signed fixed-width integral codes
    pub fn is_signed_integral(self) -> bool {
        matches!(
            self,
            TypeCode::I8 | TypeCode::I16 | TypeCode::I32 | TypeCode::I64 | TypeCode::I128
        )
    }

    /// True for unsigned fixed-width integral codes
    pub fn is_unsigned_integral(self) -> bool {
        matches!(
            self,
            TypeCode::U8 | TypeCode::U16 | TypeCode::U32 | TypeCode::U64 | TypeCode::U128
        )
    }

    /// Canonical name
    pub fn as_str(self) -> &'static str {
        match self {
            TypeCode::Object => "object",
            TypeCode::I8 => "i8",
            TypeCode::U8 => "u8",
            TypeCode::I16 => "i16",
            TypeCode::U16 => "u16",
            TypeCode::I32 => "i32",
            TypeCode::U32 => "u32",
            TypeCode::I64 => "i64",
            TypeCode::U64 => "u64",
            TypeCode::I128 => "i128",
            TypeCode::U128 => "u128",
            TypeCode::F32 => "f32",
            TypeCode::F64 => "f64",
            TypeCode::Decimal => "decimal",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `round` resolves a value exactly halfway between two candidates
///
/// The directed modes (`ToZero`, `ToNegativeInfinity`, `ToPositiveInfinity`) apply
/// to every value, not only midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MidpointRounding {
    /// Banker's rounding: ties go to the even neighbour
    #[default]
    ToEven,
    /// Ties go away from zero
    AwayFromZero,
    /// Truncate toward zero
    ToZero,
    /// Round toward negative infinity
    ToNegativeInfinity,
    /// Round toward positive infinity
    ToPositiveInfinity,
}

impl MidpointRounding {
    /// Round `value` to an integral `f64` under this mode
    pub fn round_f64(self, value: f64) -> f64 {
        match self {
            MidpointRounding::ToEven => {
                let floor = value.floor();
                let diff = value - floor;
                if diff > 0.5 {
                    floor + 1.0
                } else if diff < 0.5 {
                    floor
                } else if floor % 2.0 == 0.0 {
                    floor
                } else {
                    floor + 1.0
                }
            }
            // f64::round already breaks ties away from zero
            MidpointRounding::AwayFromZero => value.round(),
            MidpointRounding::ToZero => value.trunc(),
            MidpointRounding::ToNegativeInfinity => value.floor(),
            MidpointRounding::ToPositiveInfinity => value.ceil(),
        }
    }
}
