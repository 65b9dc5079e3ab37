//! Primitive adapters
//!
//! Out-of-the-box adapters for the built-in numeric kinds:
//!
//! | Adapter | Types |
//! |---------|-------|
//! | [`IntegerOperations`] | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` |
//! | [`FloatOperations`] | `f32`, `f64` |
//! | [`DecimalOperations`] | `rust_decimal::Decimal` |
//! | [`BigIntOperations`] | `num_bigint::BigInt` |

mod bigint;
mod decimal;
mod float;
mod integer;

pub use bigint::BigIntOperations;
pub use decimal::DecimalOperations;
pub use float::{FloatOperations, PrimitiveFloat};
pub use integer::{IntegerOperations, PrimitiveInteger};

use std::sync::Arc;

use num_bigint::BigInt;
use polynum_core::{Error, NumberStyles, Result};
use rust_decimal::Decimal;

use crate::numeric::{Numeric, Resolution};

macro_rules! builtin_numeric {
    ($adapter:ident<$t:ty>) => {
        impl Numeric for $t {
            fn resolution() -> Resolution<Self> {
                Resolution::Builtin(|| Arc::new($adapter::<$t>::new()))
            }
        }
    };
    ($adapter:ident for $t:ty) => {
        impl Numeric for $t {
            fn resolution() -> Resolution<Self> {
                Resolution::Builtin(|| Arc::new($adapter::new()))
            }
        }
    };
}

builtin_numeric!(IntegerOperations<i8>);
builtin_numeric!(IntegerOperations<i16>);
builtin_numeric!(IntegerOperations<i32>);
builtin_numeric!(IntegerOperations<i64>);
builtin_numeric!(IntegerOperations<i128>);
builtin_numeric!(IntegerOperations<isize>);
builtin_numeric!(IntegerOperations<u8>);
builtin_numeric!(IntegerOperations<u16>);
builtin_numeric!(IntegerOperations<u32>);
builtin_numeric!(IntegerOperations<u64>);
builtin_numeric!(IntegerOperations<u128>);
builtin_numeric!(IntegerOperations<usize>);
builtin_numeric!(FloatOperations<f32>);
builtin_numeric!(FloatOperations<f64>);
builtin_numeric!(DecimalOperations for Decimal);
builtin_numeric!(BigIntOperations for BigInt);

/// Reject hex styles for kinds without a bit pattern
fn reject_hex<T>(styles: NumberStyles) -> Result<()> {
    styles.validate()?;
    if styles.is_hex() {
        return Err(Error::invalid_argument(format!(
            "hex number styles are not supported for {}",
            std::any::type_name::<T>()
        )));
    }
    Ok(())
}
