//! Number text renderer

use super::scan::Special;
use super::{increment, DecimalDigits, MAX_EXPANDED_DIGITS};
use crate::culture::Culture;
use crate::error::{Error, Result};

/// Largest precision a format specifier may carry
pub const MAX_PRECISION: usize = 999;

/// Format specifier letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `G`: shortest plain rendering
    General,
    /// `D`: integral digits, zero-padded to the precision
    Decimal,
    /// `X`: two's complement hex
    Hex,
    /// `N`: grouped fixed-point
    Number,
    /// `F`: fixed-point
    Fixed,
    /// `E`: scientific notation
    Exponential,
}

/// A parsed format string such as `N2` or `x8`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Specifier
    pub kind: FormatKind,
    /// Digits after the letter, if any
    pub precision: Option<usize>,
    /// Letter case; selects hex digit and exponent case
    pub uppercase: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            kind: FormatKind::General,
            precision: None,
            uppercase: true,
        }
    }
}

impl FormatSpec {
    /// Parse a format string; `None` and `""` are general
    ///
    /// # Errors
    ///
    /// Returns `Format` for an unknown letter or a malformed precision.
    pub fn parse(format: Option<&str>) -> Result<Self> {
        let format = match format {
            None | Some("") => return Ok(Self::default()),
            Some(f) => f,
        };
        let mut chars = format.chars();
        let letter = chars.next().unwrap_or('G');
        let kind = match letter.to_ascii_uppercase() {
            'G' => FormatKind::General,
            'D' => FormatKind::Decimal,
            'X' => FormatKind::Hex,
            'N' => FormatKind::Number,
            'F' => FormatKind::Fixed,
            'E' => FormatKind::Exponential,
            _ => return Err(unknown(format)),
        };
        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            match rest.parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION && rest.bytes().all(|b| b.is_ascii_digit()) => Some(p),
                _ => return Err(unknown(format)),
            }
        };
        Ok(Self {
            kind,
            precision,
            uppercase: letter.is_ascii_uppercase(),
        })
    }

    /// Precision, or `default` when the format carried none
    pub fn precision_or(&self, default: usize) -> usize {
        self.precision.unwrap_or(default)
    }

    /// True for `D` and `X`, which only integral kinds support
    pub fn is_integral_only(&self) -> bool {
        matches!(self.kind, FormatKind::Decimal | FormatKind::Hex)
    }
}

fn unknown(format: &str) -> Error {
    Error::format(format!("format specifier '{}' is invalid", format))
}

/// Render digits under a non-hex specifier
///
/// # Errors
///
/// Returns `Format` for `X`, or for `D` on a value with a fractional part.
pub fn render(digits: &DecimalDigits, spec: &FormatSpec, culture: &Culture) -> Result<String> {
    culture.validate()?;
    match spec.kind {
        FormatKind::General => {
            let (int, frac) = digits.shifted(MAX_EXPANDED_DIGITS)?;
            let frac = frac.trim_end_matches('0');
            Ok(compose(digits.negative, &int, frac, false, culture))
        }
        FormatKind::Decimal => {
            let int = digits
                .integral_digits()
                .map_err(|_| Error::format("D format requires an integral value"))?;
            let width = spec.precision_or(0);
            let padded = if int.len() < width {
                "0".repeat(width - int.len()) + &int
            } else {
                int
            };
            Ok(signed(digits.negative && !digits.is_zero(), padded, culture))
        }
        FormatKind::Number | FormatKind::Fixed => {
            let rounded = digits.round_fraction(spec.precision_or(2))?;
            Ok(compose(
                rounded.negative,
                &rounded.integral,
                &rounded.fraction,
                spec.kind == FormatKind::Number,
                culture,
            ))
        }
        FormatKind::Exponential => scientific(digits, spec.precision_or(6), spec.uppercase, culture),
        FormatKind::Hex => Err(Error::format("X format requires an integral type")),
    }
}

/// Hex digits in the specifier's case, zero-padded to its precision
pub fn render_hex(hex: &str, spec: &FormatSpec) -> String {
    let cased = if spec.uppercase {
        hex.to_ascii_uppercase()
    } else {
        hex.to_ascii_lowercase()
    };
    let width = spec.precision_or(0);
    if cased.len() < width {
        "0".repeat(width - cased.len()) + &cased
    } else {
        cased
    }
}

/// The culture's symbol for a non-finite value
pub fn render_special(special: Special, culture: &Culture) -> String {
    match special {
        Special::NaN => culture.nan_symbol.clone(),
        Special::PositiveInfinity => culture.positive_infinity_symbol.clone(),
        Special::NegativeInfinity => culture.negative_infinity_symbol.clone(),
    }
}

fn signed(negative: bool, body: String, culture: &Culture) -> String {
    if negative {
        culture.negative_sign.clone() + &body
    } else {
        body
    }
}

fn compose(negative: bool, int: &str, frac: &str, grouped: bool, culture: &Culture) -> String {
    let int = if int.is_empty() { "0" } else { int };
    let mut out = String::with_capacity(int.len() * 2 + frac.len() + 2);
    if negative {
        out.push_str(&culture.negative_sign);
    }
    if grouped && culture.group_size > 0 {
        let first = match int.len() % culture.group_size {
            0 => culture.group_size,
            n => n,
        };
        out.push_str(&int[..first.min(int.len())]);
        let mut at = first;
        while at < int.len() {
            out.push_str(&culture.group_separator);
            out.push_str(&int[at..at + culture.group_size]);
            at += culture.group_size;
        }
    } else {
        out.push_str(int);
    }
    if !frac.is_empty() {
        out.push_str(&culture.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn scientific(
    digits: &DecimalDigits,
    precision: usize,
    uppercase: bool,
    culture: &Culture,
) -> Result<String> {
    let (int, frac) = digits.shifted(MAX_EXPANDED_DIGITS)?;
    let all = int.clone() + &frac;
    let keep = precision + 1;

    let (mut significant, mut exponent) = match all.bytes().position(|b| b != b'0') {
        Some(first) => (
            all[first..].to_string(),
            int.len() as i64 - 1 - first as i64,
        ),
        None => (String::new(), 0),
    };
    if significant.len() > keep {
        let round_up = significant.as_bytes()[keep] >= b'5';
        significant.truncate(keep);
        if round_up {
            significant = increment(&significant);
            if significant.len() > keep {
                significant.truncate(keep);
                exponent += 1;
            }
        }
    }
    significant.extend(std::iter::repeat('0').take(keep - significant.len()));

    let mut out = String::new();
    if digits.negative {
        out.push_str(&culture.negative_sign);
    }
    out.push_str(&significant[..1]);
    if precision > 0 {
        out.push_str(&culture.decimal_separator);
        out.push_str(&significant[1..]);
    }
    out.push(if uppercase { 'E' } else { 'e' });
    out.push_str(if exponent < 0 {
        &culture.negative_sign
    } else {
        &culture.positive_sign
    });
    out.push_str(&format!("{:03}", exponent.unsigned_abs()));
    Ok(out)
}
