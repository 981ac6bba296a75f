//! Metadata-carrying error variants
//!
//! Provides [`MetadataError`] plus its public ([`ErrorPayload`]) and
//! diagnostic ([`MetadataReport`]) renderings.

use crate::kind::ErrorKind;
use crate::metadata::ErrorMetadata;
use serde::{Deserialize, Serialize};

/// Error tagged by kind, carrying a typed metadata record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// Payload failed validation
    #[error("{message}")]
    BadData {
        /// Human-readable message
        message: String,
        /// Model/field the error refers to
        metadata: ErrorMetadata,
    },

    /// Request was malformed
    #[error("{message}")]
    BadRequest {
        /// Human-readable message
        message: String,
        /// Model/field the error refers to
        metadata: ErrorMetadata,
    },
}

impl MetadataError {
    /// Create bad data error
    pub fn bad_data(message: impl Into<String>, metadata: ErrorMetadata) -> Self {
        let err = Self::BadData {
            message: message.into(),
            metadata,
        };
        tracing::debug!(kind = %err.kind(), message = err.message(), "Constructed metadata error");
        err
    }

    /// Create bad request error
    pub fn bad_request(message: impl Into<String>, metadata: ErrorMetadata) -> Self {
        let err = Self::BadRequest {
            message: message.into(),
            metadata,
        };
        tracing::debug!(kind = %err.kind(), message = err.message(), "Constructed metadata error");
        err
    }

    /// Error kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadData { .. } => ErrorKind::BadData,
            Self::BadRequest { .. } => ErrorKind::BadRequest,
        }
    }

    /// Message as supplied
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadData { message, .. } | Self::BadRequest { message, .. } => message,
        }
    }

    /// Metadata as supplied
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &ErrorMetadata {
        match self {
            Self::BadData { metadata, .. } | Self::BadRequest { metadata, .. } => metadata,
        }
    }

    /// Take the metadata out of the error
    #[must_use]
    pub fn into_metadata(self) -> ErrorMetadata {
        match self {
            Self::BadData { metadata, .. } | Self::BadRequest { metadata, .. } => metadata,
        }
    }

    /// HTTP status code of the kind
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Public payload (metadata withheld)
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        let kind = self.kind();
        ErrorPayload {
            status_code: kind.status_code(),
            error: kind.reason().to_string(),
            message: self.message().to_string(),
        }
    }

    /// Diagnostic report including the metadata
    #[must_use]
    pub fn report(&self) -> MetadataReport {
        MetadataReport {
            kind: self.kind(),
            message: self.message().to_string(),
            metadata: self.metadata().clone(),
        }
    }
}

/// Create bad data error
pub fn bad_data(message: impl Into<String>, metadata: ErrorMetadata) -> MetadataError {
    MetadataError::bad_data(message, metadata)
}

/// Create bad request error
pub fn bad_request(message: impl Into<String>, metadata: ErrorMetadata) -> MetadataError {
    MetadataError::bad_request(message, metadata)
}

/// Public response body for an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// HTTP status code
    pub status_code: u16,
    /// Reason phrase
    pub error: String,
    /// Error message
    pub message: String,
}

/// Diagnostic view of an error with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataReport {
    /// Error kind
    pub kind: ErrorKind,
    /// Error message
    pub message: String,
    /// Attached metadata
    pub metadata: ErrorMetadata,
}

impl MetadataReport {
    /// Render as JSON
    ///
    /// # Errors
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let err = MetadataError::bad_request("missing id", ErrorMetadata::new("User", "id"));
        assert_eq!(err.to_string(), "missing id");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn usable_as_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(bad_data("bad email", ErrorMetadata::new("User", "email")));
        assert_eq!(err.to_string(), "bad email");
    }
}
