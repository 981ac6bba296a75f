//! Per-instance backing data
//!
//! Provides [`BackingData`], the state a [`Delegate`](crate::Delegate) owns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `name` property, and the backing field its accessor reads
pub const NAME: &str = "name";

/// Ordered string fields owned by a single delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackingData {
    fields: BTreeMap<String, String>,
}

impl BackingData {
    /// Create empty backing data
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backing data with a single `name` field
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with(NAME, name)
    }

    /// Add or replace a field
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Field value
    #[inline]
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if there are no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for BackingData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sets_name_field() {
        let data = BackingData::named("richard");
        assert_eq!(data.field(NAME), Some("richard"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn with_replaces_existing() {
        let data = BackingData::named("richard").with("name", "dick");
        assert_eq!(data.field("name"), Some("dick"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn from_pairs() {
        let data: BackingData = [("name", "susan"), ("city", "leeds")].into_iter().collect();
        let keys: Vec<_> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["city", "name"]);
    }

    #[test]
    fn serde_is_transparent() {
        let data = BackingData::named("susan");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"name":"susan"}"#);

        let back: BackingData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn empty() {
        assert!(BackingData::new().is_empty());
    }
}
