//! Error types for property lookup

/// Errors during property lookup on a [`Delegate`](crate::Delegate)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Template defines no accessor for the property
    #[error("unknown property: '{property}'")]
    UnknownProperty {
        /// Requested property
        property: String,
    },

    /// Accessor exists but the backing data has nothing for it
    #[error("property '{property}' has no backing value")]
    Unresolved {
        /// Requested property
        property: String,
    },
}

impl LookupError {
    /// Create unknown property error
    pub fn unknown(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }

    /// Create unresolved property error
    pub fn unresolved(property: impl Into<String>) -> Self {
        Self::Unresolved {
            property: property.into(),
        }
    }

    /// Property the lookup was for
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::UnknownProperty { property } | Self::Unresolved { property } => property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_display() {
        let err = LookupError::unknown("age");
        assert_eq!(err.to_string(), "unknown property: 'age'");
    }

    #[test]
    fn unresolved_display() {
        let err = LookupError::unresolved("name");
        assert_eq!(err.to_string(), "property 'name' has no backing value");
        assert_eq!(err.property(), "name");
    }
}
