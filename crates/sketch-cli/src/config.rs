//! Runner configuration
//!
//! Every field defaults to the stock sketch inputs, so
//! an empty (or absent) config file reproduces them exactly.

use serde::{Deserialize, Serialize};
use sketch_errmeta::ErrorMetadata;
use std::path::{Path, PathBuf};

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// TOML diagnostic
        #[source]
        source: toml::de::Error,
    },

    /// Parsed but unusable
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Inputs for the delegation sketch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DelegateConfig {
    /// One delegate is derived per name
    pub names: Vec<String>,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            names: vec!["richard".to_string(), "susan".to_string()],
        }
    }
}

/// Inputs for the error metadata sketch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Message for the bad data error
    pub bad_data_message: String,
    /// Message for the bad request error
    pub bad_request_message: String,
    /// Metadata attached to both errors
    pub metadata: ErrorMetadata,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            bad_data_message: "you bad data".to_string(),
            bad_request_message: "you bad request".to_string(),
            metadata: ErrorMetadata::new("Model", "Field"),
        }
    }
}

/// Top-level runner configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Delegation inputs
    pub delegate: DelegateConfig,
    /// Error metadata inputs
    pub errors: ErrorsConfig,
}

impl SketchConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With delegate names
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delegate.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// With error metadata
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: ErrorMetadata) -> Self {
        self.errors.metadata = metadata;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] or [`ConfigError::Invalid`].
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] on read, parse or validation failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&text, path)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if no delegate names are given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delegate.names.is_empty() {
            return Err(ConfigError::Invalid("delegate.names must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_stock_inputs() {
        let config = SketchConfig::new();
        assert_eq!(config.delegate.names, vec!["richard", "susan"]);
        assert_eq!(config.errors.bad_data_message, "you bad data");
        assert_eq!(config.errors.bad_request_message, "you bad request");
        assert_eq!(config.errors.metadata, ErrorMetadata::new("Model", "Field"));
    }

    #[test]
    fn empty_toml_is_default() {
        let config = SketchConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let text = "[errors.metadata]\nmodel = \"Book\"\nfield = \"bids\"\n";
        let config = SketchConfig::from_toml(text, Path::new("partial.toml")).unwrap();
        assert_eq!(config.errors.metadata, ErrorMetadata::new("Book", "bids"));
        assert_eq!(config.errors.bad_data_message, "you bad data");
        assert_eq!(config.delegate, DelegateConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = SketchConfig::from_toml("[delegate]\nnicknames = []\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_names_rejected() {
        let err = SketchConfig::from_toml("[delegate]\nnames = []\n", Path::new("x.toml"))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid config: delegate.names must not be empty");
    }

    #[test]
    fn builder_methods() {
        let config = SketchConfig::new()
            .with_names(["ada"])
            .with_metadata(ErrorMetadata::new("User", "email"));
        assert_eq!(config.delegate.names, vec!["ada"]);
        assert_eq!(config.errors.metadata.model, "User");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_file() {
        let err = SketchConfig::load("/nonexistent/sketchbook.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
