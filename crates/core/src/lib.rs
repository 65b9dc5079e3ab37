//! Core types and traits for polynum
//!
//! This crate defines the foundations every adapter builds on:
//! - NumericOperations: the operations contract implemented once per numeric kind
//! - Error: error taxonomy shared by resolution, adapters and the façade
//! - TypeCode / MidpointRounding: small shared value types
//! - Scalar: the pivot every cross-type conversion goes through
//! - NumberStyles / Culture: parse styles and culture symbols (TOML-loadable)
//! - text: the shared scanner and renderer for number text

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod culture;
pub mod error;
pub mod operations;
pub mod scalar;
pub mod styles;
pub mod text;
pub mod types;

pub use culture::Culture;
pub use error::{Error, ErrorKind, Result};
pub use operations::NumericOperations;
pub use scalar::Scalar;
pub use styles::NumberStyles;
pub use text::{DecimalDigits, FormatKind, FormatSpec, ParsedNumber, Special};
pub use types::{MidpointRounding, TypeCode};
