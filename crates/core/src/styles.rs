//! Parse style flags

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::error::{Error, Result};

/// Set of syntax elements `parse` accepts
///
/// Combine flags with `|`. The composites mirror the common cases: [`INTEGER`]
/// for plain signed integers, [`HEX_NUMBER`] for bare hex digits, [`NUMBER`] for
/// grouped decimals, [`FLOAT`] for scientific notation and [`ANY`] for everything
/// but hex.
///
/// [`INTEGER`]: NumberStyles::INTEGER
/// [`HEX_NUMBER`]: NumberStyles::HEX_NUMBER
/// [`NUMBER`]: NumberStyles::NUMBER
/// [`FLOAT`]: NumberStyles::FLOAT
/// [`ANY`]: NumberStyles::ANY
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberStyles(u32);

impl NumberStyles {
    /// Digits only
    pub const NONE: Self = Self(0);
    /// Leading whitespace is skipped
    pub const ALLOW_LEADING_WHITE: Self = Self(1 << 0);
    /// Trailing whitespace is skipped
    pub const ALLOW_TRAILING_WHITE: Self = Self(1 << 1);
    /// A sign may precede the digits
    pub const ALLOW_LEADING_SIGN: Self = Self(1 << 2);
    /// A sign may follow the digits
    pub const ALLOW_TRAILING_SIGN: Self = Self(1 << 3);
    /// A value wrapped in parentheses is negative
    pub const ALLOW_PARENTHESES: Self = Self(1 << 4);
    /// A decimal separator and fractional digits are accepted
    pub const ALLOW_DECIMAL_POINT: Self = Self(1 << 5);
    /// Group separators are accepted in the integral part
    pub const ALLOW_THOUSANDS: Self = Self(1 << 6);
    /// An `e`/`E` exponent is accepted
    pub const ALLOW_EXPONENT: Self = Self(1 << 7);
    /// Digits are hexadecimal; no prefix
    pub const ALLOW_HEX_SPECIFIER: Self = Self(1 << 8);

    /// Whitespace and a leading sign
    pub const INTEGER: Self = Self(
        Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0 | Self::ALLOW_LEADING_SIGN.0,
    );
    /// Whitespace and hex digits
    pub const HEX_NUMBER: Self = Self(
        Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0 | Self::ALLOW_HEX_SPECIFIER.0,
    );
    /// Integer plus trailing sign, decimal point and group separators
    pub const NUMBER: Self = Self(
        Self::INTEGER.0
            | Self::ALLOW_TRAILING_SIGN.0
            | Self::ALLOW_DECIMAL_POINT.0
            | Self::ALLOW_THOUSANDS.0,
    );
    /// Integer plus decimal point and exponent
    pub const FLOAT: Self =
        Self(Self::INTEGER.0 | Self::ALLOW_DECIMAL_POINT.0 | Self::ALLOW_EXPONENT.0);
    /// Every flag except hex
    pub const ANY: Self = Self(
        Self::NUMBER.0 | Self::ALLOW_PARENTHESES.0 | Self::ALLOW_EXPONENT.0,
    );

    const WHITE: Self = Self(Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0);
    const ALL: u32 = (1 << 9) - 1;

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, rejecting undefined bits
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & !Self::ALL != 0 {
            return Err(Error::invalid_argument(format!(
                "undefined number style bits {:#x}",
                bits & !Self::ALL
            )));
        }
        Ok(Self(bits))
    }

    /// True if every flag in `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the hex flag is set
    pub const fn is_hex(self) -> bool {
        self.contains(Self::ALLOW_HEX_SPECIFIER)
    }

    /// Check the combination is meaningful
    ///
    /// Hex may only be combined with the whitespace flags.
    pub fn validate(self) -> Result<()> {
        if self.is_hex() && self.0 & !(Self::HEX_NUMBER.0 | Self::WHITE.0) != 0 {
            return Err(Error::invalid_argument(
                "hex number style may only be combined with whitespace styles",
            ));
        }
        Ok(())
    }
}

impl BitOr for NumberStyles {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NumberStyles {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for NumberStyles {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for NumberStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(NumberStyles, &str); 9] = [
            (NumberStyles::ALLOW_LEADING_WHITE, "ALLOW_LEADING_WHITE"),
            (NumberStyles::ALLOW_TRAILING_WHITE, "ALLOW_TRAILING_WHITE"),
            (NumberStyles::ALLOW_LEADING_SIGN, "ALLOW_LEADING_SIGN"),
            (NumberStyles::ALLOW_TRAILING_SIGN, "ALLOW_TRAILING_SIGN"),
            (NumberStyles::ALLOW_PARENTHESES, "ALLOW_PARENTHESES"),
            (NumberStyles::ALLOW_DECIMAL_POINT, "ALLOW_DECIMAL_POINT"),
            (NumberStyles::ALLOW_THOUSANDS, "ALLOW_THOUSANDS"),
            (NumberStyles::ALLOW_EXPONENT, "ALLOW_EXPONENT"),
            (NumberStyles::ALLOW_HEX_SPECIFIER, "ALLOW_HEX_SPECIFIER"),
        ];
        if self.0 == 0 {
            return f.write_str("NumberStyles(NONE)");
        }
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "NumberStyles({})", names.join(" | "))
    }
}
