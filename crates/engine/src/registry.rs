//! Operations Registry
//!
//! Maps each type to its single adapter instance. Resolution on a cache miss
//! runs an ordered pipeline, each step either producing an adapter or passing
//! to the next:
//!
//! 1. explicit registration (bound directly into the cache)
//! 2. the provider chain, in registration order
//! 3. the type's intrinsic [`Resolution`]: builtin, enum or nullable
//! 4. otherwise `UnsupportedType`
//!
//! ## Concurrency
//!
//! The cache is a `DashMap`; the provider list sits behind a `parking_lot`
//! lock. A miss resolves without holding either (enum and nullable adapters
//! recurse into the registry), then publishes with `entry().or_insert`. A
//! thread that loses the race discards its adapter and returns the winner's,
//! so every caller observes the same instance.

use std::any::{Any, TypeId};
use std::fmt;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use polynum_core::{Error, NumericOperations, Result};
use tracing::{debug, info, warn};

use crate::numeric::{Numeric, Resolution, SharedOperations, TypeDescriptor};
use crate::provider::Provider;

type Erased = Box<dyn Any + Send + Sync>;

/// Process-wide registry
static GLOBAL: Lazy<OperationsRegistry> = Lazy::new(OperationsRegistry::new);

/// Type-indexed adapter cache with registration and providers
pub struct OperationsRegistry {
    cache: DashMap<TypeId, Erased>,
    providers: RwLock<Vec<Provider>>,
}

impl Default for OperationsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OperationsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationsRegistry")
            .field("resolved", &self.cache.len())
            .field("providers", &*self.providers.read())
            .finish()
    }
}

impl OperationsRegistry {
    /// Create an empty registry
    ///
    /// Most callers want [`OperationsRegistry::global`]; separate instances keep
    /// tests from observing each other's registrations.
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
            providers: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static OperationsRegistry {
        &GLOBAL
    }

    /// Resolve the adapter for `T`
    ///
    /// Repeated calls return the same instance.
    ///
    /// # Errors
    ///
    /// `UnsupportedType` if no step of the pipeline produces an adapter, or the
    /// error of a failing composite (e.g. `Option<U>` for an unsupported `U`).
    pub fn resolve<T: Numeric>(&self) -> Result<SharedOperations<T>> {
        if let Some(ops) = self.cached::<T>() {
            return Ok(ops);
        }

        let (ops, strategy) = self.build::<T>()?;

        match self.cache.entry(TypeId::of::<T>()) {
            Entry::Occupied(existing) => {
                debug!(
                    type_name = std::any::type_name::<T>(),
                    "Concurrent resolution lost the race; using the published adapter"
                );
                downcast::<T>(existing.get())
            }
            Entry::Vacant(slot) => {
                debug!(
                    type_name = std::any::type_name::<T>(),
                    strategy, "Resolved numeric operations"
                );
                slot.insert(Box::new(ops.clone()));
                Ok(ops)
            }
        }
    }

    /// Bind `adapter` as the operations for `T`
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` if `T` already has an adapter, whether registered or
    /// resolved.
    pub fn register<T, A>(&self, adapter: A) -> Result<()>
    where
        T: Numeric,
        A: NumericOperations<T>,
    {
        match self.cache.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(Error::AlreadyRegistered {
                type_name: std::any::type_name::<T>(),
            }),
            Entry::Vacant(slot) => {
                let shared: SharedOperations<T> = std::sync::Arc::new(adapter);
                slot.insert(Box::new(shared));
                info!(
                    type_name = std::any::type_name::<T>(),
                    adapter = std::any::type_name::<A>(),
                    "Registered numeric operations"
                );
                Ok(())
            }
        }
    }

    /// Append a provider to the chain
    ///
    /// Affects only types resolved afterwards.
    pub fn register_provider(&self, provider: Provider) {
        info!(name = provider.name, "Registered numeric operations provider");
        self.providers.write().push(provider);
    }

    /// True if `T` already has an adapter in this registry
    pub fn is_resolved<T: 'static>(&self) -> bool {
        self.cache.contains_key(&TypeId::of::<T>())
    }

    /// Number of types with an adapter
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True if no type has an adapter yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.read().len()
    }

    fn cached<T: Numeric>(&self) -> Option<SharedOperations<T>> {
        let entry = self.cache.get(&TypeId::of::<T>())?;
        downcast::<T>(entry.value()).ok()
    }

    fn build<T: Numeric>(&self) -> Result<(SharedOperations<T>, &'static str)> {
        if let Some(ops) = self.from_providers::<T>() {
            return Ok((ops, "provider"));
        }
        match T::resolution() {
            Resolution::Builtin(build) => Ok((build(), "builtin")),
            Resolution::Enum(compose) => Ok((compose(self)?, "enum")),
            Resolution::Nullable(compose) => Ok((compose(self)?, "nullable")),
            Resolution::Opaque => Err(Error::unsupported_type::<T>()),
        }
    }

    fn from_providers<T: Numeric>(&self) -> Option<SharedOperations<T>> {
        // Snapshot so providers may register further providers without deadlocking
        let providers = self.providers.read().clone();
        if providers.is_empty() {
            return None;
        }
        let descriptor = TypeDescriptor::of::<T>();
        for provider in &providers {
            let Some(candidate) = provider.select(&descriptor) else {
                continue;
            };
            if candidate.target() != descriptor.id {
                warn!(
                    provider = provider.name,
                    requested = descriptor.name,
                    offered = candidate.target_name(),
                    "Provider offered a candidate for a different type; skipping"
                );
                continue;
            }
            if let Some(ops) = candidate.instantiate::<T>() {
                return Some(ops);
            }
        }
        None
    }
}

fn downcast<T: 'static>(erased: &Erased) -> Result<SharedOperations<T>> {
    erased
        .downcast_ref::<SharedOperations<T>>()
        .cloned()
        .ok_or_else(Error::unsupported_type::<T>)
}
