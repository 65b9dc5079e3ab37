//! Culture-aware number text
//!
//! Adapters share one scanner and one renderer so every numeric kind accepts and
//! produces the same syntax:
//!
//! - [`scan`] turns text into a [`ParsedNumber`] under a [`NumberStyles`] mask.
//!   Range checks and the final conversion stay with the adapter.
//! - [`render`] turns a [`DecimalDigits`] into text under a [`FormatSpec`].
//!
//! [`NumberStyles`]: crate::styles::NumberStyles

pub mod render;
pub mod scan;

pub use render::{FormatKind, FormatSpec};
pub use scan::{scan, scan_special, ParsedNumber, Special};

use crate::error::{Error, Result};

/// Upper bound on the digits an exponent may append to an integral value
pub const MAX_EXPANDED_DIGITS: usize = 4096;

/// Sign and decimal digits of a number
///
/// The value is `integral.fraction × 10^exponent`. `integral` carries no leading
/// zeros; either digit string may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecimalDigits {
    /// Sign
    pub negative: bool,
    /// Digits before the separator
    pub integral: String,
    /// Digits after the separator
    pub fraction: String,
    /// Power of ten applied to the digits
    pub exponent: i32,
}

impl DecimalDigits {
    /// Build from Rust's plain rendering (`-123.45`, `7`, `0.5`)
    pub fn from_plain(text: &str) -> Self {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (integral, fraction) = body.split_once('.').unwrap_or((body, ""));
        Self {
            negative,
            integral: integral.trim_start_matches('0').to_string(),
            fraction: fraction.to_string(),
            exponent: 0,
        }
    }

    /// True if every digit is zero
    pub fn is_zero(&self) -> bool {
        self.integral.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    /// Digits of the integral value, exponent applied
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if a non-zero digit remains after the decimal point, or
    /// if the exponent would expand the value beyond [`MAX_EXPANDED_DIGITS`].
    pub fn integral_digits(&self) -> Result<String> {
        self.integral_digits_within(MAX_EXPANDED_DIGITS)
    }

    /// [`integral_digits`](Self::integral_digits) with a caller-chosen digit limit
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if a non-zero digit remains after the decimal point, or
    /// if the exponent would expand the value beyond `max_digits`.
    pub fn integral_digits_within(&self, max_digits: usize) -> Result<String> {
        let (int, frac) = self.shifted(max_digits)?;
        if frac.bytes().any(|b| b != b'0') {
            return Err(Error::overflow("value has a non-zero fractional part"));
        }
        Ok(if int.is_empty() { "0".to_string() } else { int })
    }

    /// Plain `[-]int[.frac]` text with the exponent applied
    pub fn to_plain(&self, max_digits: usize) -> Result<String> {
        let (int, frac) = self.shifted(max_digits)?;
        let mut out = String::with_capacity(int.len() + frac.len() + 2);
        if self.negative {
            out.push('-');
        }
        out.push_str(if int.is_empty() { "0" } else { &int });
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }
        Ok(out)
    }

    /// Text Rust's float parser accepts
    pub fn to_float_literal(&self) -> String {
        format!(
            "{}{}.{}e{}",
            if self.negative { "-" } else { "" },
            if self.integral.is_empty() { "0" } else { &self.integral },
            if self.fraction.is_empty() { "0" } else { &self.fraction },
            self.exponent
        )
    }

    /// Round to `precision` fractional digits, ties away from zero, exponent applied
    pub fn round_fraction(&self, precision: usize) -> Result<Self> {
        let (int, mut frac) = self.shifted(MAX_EXPANDED_DIGITS)?;
        if frac.len() <= precision {
            frac.extend(std::iter::repeat('0').take(precision - frac.len()));
            return Ok(Self {
                negative: self.negative,
                integral: int,
                fraction: frac,
                exponent: 0,
            });
        }
        let round_up = frac.as_bytes()[precision] >= b'5';
        frac.truncate(precision);
        let mut digits = int.clone() + &frac;
        if round_up {
            digits = increment(&digits);
        }
        let split = digits.len() - precision;
        Ok(Self {
            negative: self.negative,
            integral: digits[..split].trim_start_matches('0').to_string(),
            fraction: digits[split..].to_string(),
            exponent: 0,
        })
    }

    /// Split into integral and fractional digits with the exponent applied
    pub(crate) fn shifted(&self, max_digits: usize) -> Result<(String, String)> {
        let digits = self.integral.clone() + &self.fraction;
        let point = self.integral.len() as i64 + i64::from(self.exponent);
        if point <= 0 {
            let zeros = (-point) as usize;
            if zeros > max_digits {
                // Only zeros survive at this scale
                let frac = if digits.bytes().all(|b| b == b'0') {
                    String::new()
                } else {
                    "0".repeat(max_digits) + "1"
                };
                return Ok((String::new(), frac));
            }
            return Ok((String::new(), "0".repeat(zeros) + &digits));
        }
        let point = point as usize;
        if point > digits.len() {
            if point > max_digits && !self.is_zero() {
                return Err(Error::overflow("exponent is too large"));
            }
            let padding = point.min(max_digits) - digits.len().min(point.min(max_digits));
            let int = digits + &"0".repeat(padding);
            return Ok((int.trim_start_matches('0').to_string(), String::new()));
        }
        let (int, frac) = digits.split_at(point);
        Ok((int.trim_start_matches('0').to_string(), frac.to_string()))
    }
}

/// Add one to a decimal digit string, growing it on carry
pub(crate) fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Parse hex digits as a bit pattern `byte_width` bytes wide
///
/// Leading zeros are ignored. More significant digits than the width holds overflow.
pub fn hex_bits(digits: &str, byte_width: usize) -> Result<u128> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > byte_width * 2 {
        return Err(Error::overflow(format!(
            "hex value does not fit in {} bytes",
            byte_width
        )));
    }
    if significant.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(significant, 16).map_err(|e| Error::format(e.to_string()))
}
