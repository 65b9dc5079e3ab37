//! Resolution engine for polynum
//!
//! This crate turns the operations contract into something callers can reach
//! for any type:
//! - Primitive adapters: fixed-width integers, floats, `Decimal`, `BigInt`
//! - Enum adapter: open numeric enums declared with [`numeric_enum!`]
//! - Nullable adapter: `Option<U>` lifted over `U`'s adapter
//! - Registry: one shared adapter per type, explicit registration, providers
//!
//! The registry is the only component that knows how a type obtains its adapter.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod enumeration;
pub mod nullable;
pub mod numeric;
pub mod primitives;
pub mod provider;
pub mod registry;

pub use enumeration::{EnumOperations, NumericEnum};
pub use nullable::{NullableOperations, ABSENT_SIGN};
pub use numeric::{ComposeFn, Numeric, Resolution, SharedOperations, TypeDescriptor, TypeKind};
pub use primitives::{
    BigIntOperations, DecimalOperations, FloatOperations, IntegerOperations, PrimitiveFloat,
    PrimitiveInteger,
};
pub use provider::{Candidate, Provider};
pub use registry::OperationsRegistry;
