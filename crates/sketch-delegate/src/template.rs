//! Accessor templates and the delegates derived from them
//!
//! A [`Template`] is shared through an [`Arc`] and never mutated once shared.
//! All per-instance state lives in the [`Delegate`].

use crate::data::{BackingData, NAME};
use crate::error::LookupError;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Computed accessor: reads only the backing data it is handed
pub type Accessor = fn(&BackingData) -> Option<&str>;

fn name_accessor(data: &BackingData) -> Option<&str> {
    data.field(NAME)
}

/// Table of computed accessors keyed by property name
#[derive(Clone, Default)]
pub struct Template {
    accessors: BTreeMap<String, Accessor>,
}

impl Template {
    /// Create empty template
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Template with the `name` accessor
    #[must_use]
    pub fn person() -> Self {
        Self::new().define(NAME, name_accessor)
    }

    /// Define (or redefine) a computed accessor
    #[must_use]
    pub fn define(mut self, property: impl Into<String>, accessor: Accessor) -> Self {
        self.accessors.insert(property.into(), accessor);
        self
    }

    /// Freeze the template for sharing
    #[inline]
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Derive a delegate that owns `data`
    #[must_use]
    pub fn derive(self: &Arc<Self>, data: BackingData) -> Delegate {
        tracing::debug!(fields = data.len(), "Deriving delegate from template");
        Delegate {
            template: Arc::clone(self),
            data,
        }
    }

    /// Accessor for a property
    #[inline]
    #[must_use]
    pub fn accessor(&self, property: &str) -> Option<Accessor> {
        self.accessors.get(property).copied()
    }

    /// Property names the template defines
    #[must_use]
    pub fn properties(&self) -> Vec<&str> {
        self.accessors.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("properties", &self.properties())
            .finish()
    }
}

/// Object whose properties resolve through a shared [`Template`]
#[derive(Debug, Clone)]
pub struct Delegate {
    template: Arc<Template>,
    data: BackingData,
}

impl Delegate {
    /// Look up a property
    ///
    /// Runs the template's accessor against this delegate's own data.
    ///
    /// # Errors
    /// - [`LookupError::UnknownProperty`] if the template has no accessor
    /// - [`LookupError::Unresolved`] if the accessor yields nothing
    pub fn get(&self, property: &str) -> Result<&str, LookupError> {
        let Some(accessor) = self.template.accessor(property) else {
            tracing::warn!(property, "No accessor defined for property");
            return Err(LookupError::unknown(property));
        };

        match accessor(&self.data) {
            Some(value) => {
                tracing::debug!(property, value, "Resolved property");
                Ok(value)
            }
            None => {
                tracing::warn!(property, "Accessor found no backing value");
                Err(LookupError::unresolved(property))
            }
        }
    }

    /// Backing data owned by this delegate
    #[inline]
    #[must_use]
    pub fn data(&self) -> &BackingData {
        &self.data
    }

    /// Template this delegate resolves through
    #[inline]
    #[must_use]
    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// Check if two delegates share the same template instance
    #[inline]
    #[must_use]
    pub fn shares_template_with(&self, other: &Delegate) -> bool {
        Arc::ptr_eq(&self.template, &other.template)
    }
}

/// Anything with a resolvable `name`
pub trait Named {
    /// Resolved name
    ///
    /// # Errors
    /// Returns [`LookupError`] if the name cannot be resolved.
    fn name(&self) -> Result<&str, LookupError>;
}

impl Named for Delegate {
    #[inline]
    fn name(&self) -> Result<&str, LookupError> {
        self.get(NAME)
    }
}
