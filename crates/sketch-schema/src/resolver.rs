//! Resolver map keyed by type and field
//!
//! Resolvers take no arguments; the harness invokes them by name.

use crate::error::{SchemaError, SchemaResult};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field resolver invoked with no arguments
pub type Resolver = fn() -> Value;

/// Map of type name to field name to [`Resolver`]
#[derive(Debug, Clone, Default)]
pub struct ResolverMap {
    types: BTreeMap<String, BTreeMap<String, Resolver>>,
}

impl ResolverMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver, replacing any previous one for the pair
    #[must_use]
    pub fn with(mut self, type_name: &str, field: &str, resolver: Resolver) -> Self {
        self.register(type_name, field, resolver);
        self
    }

    /// Register a resolver, replacing any previous one for the pair
    pub fn register(&mut self, type_name: &str, field: &str, resolver: Resolver) {
        self.types
            .entry(type_name.to_string())
            .or_default()
            .insert(field.to_string(), resolver);
    }

    /// Resolver for a type/field pair
    #[must_use]
    pub fn get(&self, type_name: &str, field: &str) -> Option<Resolver> {
        self.types.get(type_name)?.get(field).copied()
    }

    /// Invoke the resolver for a type/field pair
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownResolver`] if nothing is registered.
    pub fn resolve(&self, type_name: &str, field: &str) -> SchemaResult<Value> {
        match self.get(type_name, field) {
            Some(resolver) => {
                tracing::debug!(type_name, field, "Invoking resolver");
                Ok(resolver())
            }
            None => {
                tracing::warn!(type_name, field, "No resolver registered");
                Err(SchemaError::unknown_resolver(type_name, field))
            }
        }
    }

    /// Type names with at least one resolver
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Field names resolved for a type
    #[must_use]
    pub fn fields(&self, type_name: &str) -> Vec<&str> {
        self.types
            .get(type_name)
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Total number of registered resolvers
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.values().map(BTreeMap::len).sum()
    }

    /// Check if no resolvers are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
