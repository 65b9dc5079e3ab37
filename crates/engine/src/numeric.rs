//! Types the engine can resolve
//!
//! Rust has no runtime reflection, so a type opts into resolution by
//! implementing [`Numeric`]. The trait states the type's *intrinsic* strategy:
//! built-in adapter, enum adapter, nullable lifting, or none at all. Types with
//! no intrinsic strategy (user wrappers) rely on explicit registration or a
//! provider.
//!
//! ```ignore
//! #[derive(Clone)]
//! struct Meters(f64);
//! impl Numeric for Meters {}
//! register_operations::<Meters, _>(MetersOperations)?;
//! ```

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use polynum_core::{NumericOperations, Result};

use crate::registry::OperationsRegistry;

/// Shared handle to a type's adapter
pub type SharedOperations<T> = Arc<dyn NumericOperations<T>>;

/// Builds a composite adapter, resolving its dependencies through the registry
pub type ComposeFn<T> = fn(&OperationsRegistry) -> Result<SharedOperations<T>>;

/// How a type obtains its adapter when nothing was registered for it
pub enum Resolution<T> {
    /// A primitive adapter supplied by the engine
    Builtin(fn() -> SharedOperations<T>),
    /// An enum adapter over the underlying integral type
    Enum(ComposeFn<T>),
    /// A nullable adapter over the wrapped type
    Nullable(ComposeFn<T>),
    /// No intrinsic strategy
    Opaque,
}

impl<T> Resolution<T> {
    /// The descriptor kind this strategy corresponds to
    pub fn kind(&self) -> TypeKind {
        match self {
            Resolution::Builtin(_) => TypeKind::Builtin,
            Resolution::Enum(_) => TypeKind::Enum,
            Resolution::Nullable(_) => TypeKind::Nullable,
            Resolution::Opaque => TypeKind::Custom,
        }
    }
}

/// A value type the registry can resolve an adapter for
pub trait Numeric: Clone + Send + Sync + 'static {
    /// Intrinsic strategy; custom types keep the default
    fn resolution() -> Resolution<Self> {
        Resolution::Opaque
    }
}

/// Coarse shape of a type, as seen by providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A primitive with an engine-supplied adapter
    Builtin,
    /// A `numeric_enum!` type
    Enum,
    /// `Option<U>`
    Nullable,
    /// Anything else
    Custom,
}

/// What a provider is told about the type being resolved
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Identity of the type
    pub id: TypeId,
    /// Name, for diagnostics only
    pub name: &'static str,
    /// Shape of the type
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Describe `T`
    pub fn of<T: Numeric>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: T::resolution().kind(),
        }
    }

    /// True if this describes `U`
    pub fn is<U: 'static>(&self) -> bool {
        self.id == TypeId::of::<U>()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
