//! Typed metadata attached to errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which model and field an error refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorMetadata {
    /// Model name
    pub model: String,
    /// Field name within the model
    pub field: String,
}

impl ErrorMetadata {
    /// Create metadata record
    #[inline]
    #[must_use]
    pub fn new(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ model: '{}', field: '{}' }}", self.model, self.field)
    }
}
