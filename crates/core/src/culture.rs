//! Culture-specific number symbols
//!
//! A [`Culture`] is the only formatting configuration the engine knows about. The
//! default is the invariant culture (`.` decimal separator, `,` groups of three).
//! Other cultures are plain values, built in code or loaded from TOML:
//!
//! ```toml
//! decimal_separator = ","
//! group_separator = "."
//! group_size = 3
//! ```
//!
//! Omitted fields fall back to the invariant values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Symbols used when parsing and formatting numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    /// Separates integral and fractional digits
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Separates digit groups in the integral part
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    /// Digits per group; `0` disables grouping
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Sign of negative values
    #[serde(default = "default_negative_sign")]
    pub negative_sign: String,
    /// Sign accepted for positive values
    #[serde(default = "default_positive_sign")]
    pub positive_sign: String,
    /// Rendering of NaN
    #[serde(default = "default_nan_symbol")]
    pub nan_symbol: String,
    /// Rendering of positive infinity
    #[serde(default = "default_positive_infinity_symbol")]
    pub positive_infinity_symbol: String,
    /// Rendering of negative infinity
    #[serde(default = "default_negative_infinity_symbol")]
    pub negative_infinity_symbol: String,
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_group_separator() -> String {
    ",".to_string()
}

fn default_group_size() -> usize {
    3
}

fn default_negative_sign() -> String {
    "-".to_string()
}

fn default_positive_sign() -> String {
    "+".to_string()
}

fn default_nan_symbol() -> String {
    "NaN".to_string()
}

fn default_positive_infinity_symbol() -> String {
    "Infinity".to_string()
}

fn default_negative_infinity_symbol() -> String {
    "-Infinity".to_string()
}

impl Default for Culture {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
            group_size: default_group_size(),
            negative_sign: default_negative_sign(),
            positive_sign: default_positive_sign(),
            nan_symbol: default_nan_symbol(),
            positive_infinity_symbol: default_positive_infinity_symbol(),
            negative_infinity_symbol: default_negative_infinity_symbol(),
        }
    }
}

impl Culture {
    /// The invariant culture
    pub fn invariant() -> Self {
        Self::default()
    }

    /// Check that the symbols can be told apart while scanning
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a separator or sign is empty, or if the
    /// decimal and group separators are identical.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("decimal_separator", &self.decimal_separator),
            ("group_separator", &self.group_separator),
            ("negative_sign", &self.negative_sign),
            ("positive_sign", &self.positive_sign),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(Error::config(format!("{} must not be empty", name)));
            }
        }
        if self.decimal_separator == self.group_separator {
            return Err(Error::config(format!(
                "decimal and group separators are both '{}'",
                self.decimal_separator
            )));
        }
        if self.negative_sign == self.positive_sign {
            return Err(Error::config(format!(
                "negative and positive signs are both '{}'",
                self.negative_sign
            )));
        }
        Ok(())
    }

    /// Parse and validate a culture from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let culture: Culture = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse culture: {}", e)))?;
        culture.validate()?;
        Ok(culture)
    }

    /// Read, parse and validate a culture file
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read culture file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => {
                Error::config(format!("{} (in '{}')", reason, path.display()))
            }
            other => other,
        })
    }

    /// Serialize this culture to TOML and write it to the given path
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize culture: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write culture file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
