//! Provider chain
//!
//! Providers are consulted, in registration order, for every type that misses
//! the cache and has no explicit registration. A provider inspects the
//! [`TypeDescriptor`] and may answer with a [`Candidate`]: a deferred adapter
//! for one target type. Only the winning candidate is instantiated.
//!
//! ```ignore
//! register_provider(Provider::new("meters", |desc| {
//!     desc.is::<Meters>().then(Candidate::of::<Meters, MetersOperations>)
//! }));
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use polynum_core::NumericOperations;

use crate::numeric::{SharedOperations, TypeDescriptor};

/// Provider callback
pub type SelectFn = dyn Fn(&TypeDescriptor) -> Option<Candidate> + Send + Sync;

/// A named entry in the provider chain
#[derive(Clone)]
pub struct Provider {
    /// Human-readable name for logging
    pub name: &'static str,
    select: Arc<SelectFn>,
}

impl Provider {
    /// Create a provider from a selection callback
    pub fn new<F>(name: &'static str, select: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> Option<Candidate> + Send + Sync + 'static,
    {
        Self {
            name,
            select: Arc::new(select),
        }
    }

    /// Ask this provider for a candidate
    pub fn select(&self, descriptor: &TypeDescriptor) -> Option<Candidate> {
        (self.select)(descriptor)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider").field("name", &self.name).finish()
    }
}

type Factory = Box<dyn FnOnce() -> Box<dyn Any + Send + Sync> + Send>;

/// A deferred adapter for one target type
pub struct Candidate {
    target: TypeId,
    target_name: &'static str,
    adapter_name: &'static str,
    factory: Factory,
}

impl Candidate {
    /// Candidate that default-constructs adapter `A` for `T`
    pub fn of<T: 'static, A: NumericOperations<T> + Default>() -> Self {
        Self::from_factory::<T, A>(A::default)
    }

    /// Candidate that hands out an already built adapter
    pub fn with<T: 'static, A: NumericOperations<T>>(adapter: A) -> Self {
        Self::from_factory::<T, A>(move || adapter)
    }

    fn from_factory<T: 'static, A: NumericOperations<T>>(
        build: impl FnOnce() -> A + Send + 'static,
    ) -> Self {
        Self {
            target: TypeId::of::<T>(),
            target_name: std::any::type_name::<T>(),
            adapter_name: std::any::type_name::<A>(),
            factory: Box::new(move || {
                let shared: SharedOperations<T> = Arc::new(build());
                Box::new(shared)
            }),
        }
    }

    /// Type this candidate adapts
    pub fn target(&self) -> TypeId {
        self.target
    }

    /// Name of the adapted type
    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    /// Name of the adapter type
    pub fn adapter_name(&self) -> &'static str {
        self.adapter_name
    }

    /// Build the adapter if this candidate targets `T`
    pub(crate) fn instantiate<T: 'static>(self) -> Option<SharedOperations<T>> {
        if self.target != TypeId::of::<T>() {
            return None;
        }
        (self.factory)()
            .downcast::<SharedOperations<T>>()
            .ok()
            .map(|shared| *shared)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("target", &self.target_name)
            .field("adapter", &self.adapter_name)
            .finish()
    }
}
