//! Number text scanner

use super::DecimalDigits;
use crate::culture::Culture;
use crate::error::{Error, Result};
use crate::styles::NumberStyles;

/// Syntax-checked number text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNumber {
    /// Sign, digits and exponent of a decimal number
    Decimal(DecimalDigits),
    /// Hex digits, uppercased, no prefix
    Hex(String),
}

/// Non-finite float symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// Not a number
    NaN,
    /// Positive infinity
    PositiveInfinity,
    /// Negative infinity
    NegativeInfinity,
}

/// Scan `text` under `styles`
///
/// # Errors
///
/// `InvalidArgument` for a hex style mixed with non-whitespace flags, `Format`
/// for text outside the accepted syntax, `Config` for a culture that fails
/// [`Culture::validate`].
pub fn scan(text: &str, styles: NumberStyles, culture: &Culture) -> Result<ParsedNumber> {
    styles.validate()?;
    culture.validate()?;
    let body = trim_white(text, styles);

    if styles.is_hex() {
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed(text));
        }
        return Ok(ParsedNumber::Hex(body.to_ascii_uppercase()));
    }

    let mut body = body;
    let mut negative = false;
    let mut signed = false;

    if styles.contains(NumberStyles::ALLOW_PARENTHESES) && body.starts_with('(') {
        body = body
            .strip_prefix('(')
            .and_then(|b| b.strip_suffix(')'))
            .ok_or_else(|| malformed(text))?;
        negative = true;
        signed = true;
    }

    if !signed && styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        if let Some(rest) = body.strip_prefix(culture.negative_sign.as_str()) {
            body = rest;
            negative = true;
            signed = true;
        } else if let Some(rest) = body.strip_prefix(culture.positive_sign.as_str()) {
            body = rest;
            signed = true;
        }
    }

    if !signed && styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) {
        if let Some(rest) = body.strip_suffix(culture.negative_sign.as_str()) {
            body = rest;
            negative = true;
        } else if let Some(rest) = body.strip_suffix(culture.positive_sign.as_str()) {
            body = rest;
        }
    }

    let mut digits = DecimalDigits {
        negative,
        ..DecimalDigits::default()
    };
    let mut rest = body;
    let mut seen_digit = false;

    // Integral part
    loop {
        if let Some(c) = rest.chars().next().filter(char::is_ascii_digit) {
            digits.integral.push(c);
            rest = &rest[1..];
            seen_digit = true;
        } else if seen_digit
            && styles.contains(NumberStyles::ALLOW_THOUSANDS)
            && rest.starts_with(culture.group_separator.as_str())
        {
            rest = &rest[culture.group_separator.len()..];
        } else {
            break;
        }
    }

    // Fractional part
    if styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) {
        if let Some(after) = rest.strip_prefix(culture.decimal_separator.as_str()) {
            rest = after;
            while let Some(c) = rest.chars().next().filter(char::is_ascii_digit) {
                digits.fraction.push(c);
                rest = &rest[1..];
                seen_digit = true;
            }
        }
    }

    if !seen_digit {
        return Err(malformed(text));
    }

    // Exponent
    if styles.contains(NumberStyles::ALLOW_EXPONENT) {
        if let Some(after) = rest.strip_prefix(|c: char| c == 'e' || c == 'E') {
            let (exp_negative, after) = if let Some(a) = after.strip_prefix('-') {
                (true, a)
            } else if let Some(a) = after.strip_prefix(culture.negative_sign.as_str()) {
                (true, a)
            } else if let Some(a) = after.strip_prefix('+') {
                (false, a)
            } else if let Some(a) = after.strip_prefix(culture.positive_sign.as_str()) {
                (false, a)
            } else {
                (false, after)
            };
            let len = after.bytes().take_while(u8::is_ascii_digit).count();
            if len == 0 {
                return Err(malformed(text));
            }
            // Saturate: anything past i32 is already out of every range
            let magnitude = after[..len]
                .bytes()
                .fold(0i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
            digits.exponent = if exp_negative { -magnitude } else { magnitude };
            rest = &after[len..];
        }
    }

    if !rest.is_empty() {
        return Err(malformed(text));
    }

    digits.integral = digits.integral.trim_start_matches('0').to_string();
    Ok(ParsedNumber::Decimal(digits))
}

/// Recognize the culture's NaN and infinity symbols
///
/// Matching ignores ASCII case. A leading negative sign before the positive
/// infinity symbol is accepted when the styles allow a leading sign.
pub fn scan_special(text: &str, styles: NumberStyles, culture: &Culture) -> Option<Special> {
    let body = trim_white(text, styles);
    let matches = |symbol: &str| !symbol.is_empty() && body.eq_ignore_ascii_case(symbol);

    if matches(&culture.nan_symbol) {
        return Some(Special::NaN);
    }
    if matches(&culture.negative_infinity_symbol) {
        return Some(Special::NegativeInfinity);
    }
    if matches(&culture.positive_infinity_symbol) {
        return Some(Special::PositiveInfinity);
    }
    if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        let signed = |sign: &str| {
            body.strip_prefix(sign)
                .is_some_and(|rest| rest.eq_ignore_ascii_case(&culture.positive_infinity_symbol))
        };
        if signed(&culture.negative_sign) {
            return Some(Special::NegativeInfinity);
        }
        if signed(&culture.positive_sign) {
            return Some(Special::PositiveInfinity);
        }
    }
    None
}

fn trim_white(text: &str, styles: NumberStyles) -> &str {
    let mut body = text;
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        body = body.trim_start();
    }
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        body = body.trim_end();
    }
    body
}

fn malformed(text: &str) -> Error {
    Error::format(format!("input string '{}' was not in a correct format", text))
}
