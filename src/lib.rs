//! polynum - generic numeric operations over an open set of types
//!
//! One contract for arithmetic, comparison, conversion, parsing and formatting
//! over fixed-width integers, floats, `Decimal`, `BigInt`, numeric enums,
//! `Option<T>` and user-supplied numeric wrappers.
//!
//! # Quick Start
//!
//! ```ignore
//! use polynum::{Number, convert, parse, NumberStyles};
//!
//! // Operators go through the resolved adapter and report failures
//! let sum = (Number::create(250u8)? + 10)?;
//! assert_eq!(sum.into_value(), 4);
//!
//! // Conversion between any two resolvable types
//! let wide: f64 = convert(7i32)?;
//!
//! // Two's complement hex of the target width
//! let byte: i8 = parse(" FF ", Some(NumberStyles::HEX_NUMBER))?;
//! assert_eq!(byte, -1);
//! ```
//!
//! # Architecture
//!
//! The [`OperationsRegistry`] resolves and caches one adapter per type: explicit
//! registration first, then the provider chain, then the type's intrinsic
//! strategy (built-in, enum, nullable). The façade and static entry points in
//! this crate are thin layers over the resolved adapter.

// Re-export the public API from polynum-api
pub use polynum_api::*;
