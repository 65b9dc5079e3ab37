//! Public API layer for polynum
//!
//! Two ways to reach a type's operations:
//! - **Number façade**: [`Number<T>`] wraps a value with its adapter and
//!   implements the arithmetic, bitwise and comparison operators
//! - **Static entry points**: free functions such as [`add`], [`parse`] and
//!   [`convert`] over plain values
//!
//! Both resolve adapters from the process-wide [`OperationsRegistry`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use polynum::{Number, parse, NumberStyles};
//!
//! let total = (Number::create(40i32)? + 2)?;
//! assert_eq!(total.to_string(), "42");
//!
//! let byte: u8 = parse(" FF ", Some(NumberStyles::HEX_NUMBER))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod functions;
pub mod number;

pub use functions::*;
pub use number::Number;

// Re-export the contract and engine types at crate root for convenience
pub use polynum_core::{
    Culture, Error, ErrorKind, MidpointRounding, NumberStyles, NumericOperations, Result, Scalar,
    TypeCode,
};
pub use polynum_engine::{
    numeric_enum, BigIntOperations, Candidate, DecimalOperations, EnumOperations,
    FloatOperations, IntegerOperations, NullableOperations, Numeric, NumericEnum,
    OperationsRegistry, Provider, Resolution, SharedOperations, TypeDescriptor, TypeKind,
    ABSENT_SIGN,
};
