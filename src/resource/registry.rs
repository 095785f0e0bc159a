//! Resource Type Registry
//!
//! Binds `(provider, type_key)` pairs to resource kinds. The default registry
//! is built once with every built-in provider and is read-only afterwards.

use super::kind::ResourceKind;
use crate::error::{ResourceError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Provider-scoped bindings from type key to resource kind
#[derive(Debug, Default)]
pub struct TypeRegistry {
    providers: HashMap<String, HashMap<&'static str, &'static dyn ResourceKind>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `kind` under its own type key for `provider`
    pub fn register(&mut self, provider: &str, kind: &'static dyn ResourceKind) -> Result<()> {
        let type_key = kind.type_key();
        let kinds = self.providers.entry(provider.to_string()).or_default();

        if kinds.contains_key(type_key) {
            return Err(ResourceError::DuplicateType {
                provider: provider.to_string(),
                type_key: type_key.to_string(),
            });
        }

        tracing::debug!("register: provider={}, type={}", provider, type_key);
        kinds.insert(type_key, kind);
        Ok(())
    }

    /// Get the kind bound to an exact `(provider, type_key)` pair
    pub fn lookup(&self, provider: &str, type_key: &str) -> Result<&'static dyn ResourceKind> {
        self.providers
            .get(provider)
            .and_then(|kinds| kinds.get(type_key))
            .copied()
            .ok_or_else(|| ResourceError::UnknownType {
                provider: provider.to_string(),
                type_key: type_key.to_string(),
            })
    }

    pub fn contains(&self, provider: &str, type_key: &str) -> bool {
        self.lookup(provider, type_key).is_ok()
    }

    /// All provider namespaces (sorted)
    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        providers.sort_unstable();
        providers
    }

    /// Type keys of a provider that must exist (sorted, for listings)
    pub fn provider_type_keys(&self, provider: &str) -> Result<Vec<&'static str>> {
        if !self.providers.contains_key(provider) {
            return Err(ResourceError::UnknownProvider(provider.to_string()));
        }
        Ok(self.type_keys(provider))
    }

    /// All type keys for a provider (sorted, for listings)
    pub fn type_keys(&self, provider: &str) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .providers
            .get(provider)
            .map(|kinds| kinds.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}

/// Global registry with every built-in provider
static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Get the default registry (built on first access)
pub fn get_registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(|| {
        let mut registry = TypeRegistry::new();

        crate::gcp::register_all(&mut registry)
            .unwrap_or_else(|e| panic!("Failed to build resource registry: {}", e));

        tracing::debug!(
            "Resource registry built: {} gcp types",
            registry.type_keys(crate::gcp::PROVIDER).len()
        );
        registry
    })
}
