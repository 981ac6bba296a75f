//! Sketch Errmeta
//!
//! Error kinds that carry a typed metadata record.
//!
//! Each [`MetadataError`] variant holds its message and an [`ErrorMetadata`]
//! payload; [`MetadataError::metadata`] hands the payload back unchanged.
//!
//! # Example
//!
//! ```rust
//! use sketch_errmeta::{bad_data, ErrorMetadata};
//!
//! let err = bad_data("you bad data", ErrorMetadata::new("Model", "Field"));
//! assert_eq!(err.metadata(), &ErrorMetadata::new("Model", "Field"));
//! assert_eq!(err.to_string(), "you bad data");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod kind;
pub mod metadata;

// Re-exports
pub use error::{bad_data, bad_request, ErrorPayload, MetadataError, MetadataReport};
pub use kind::ErrorKind;
pub use metadata::ErrorMetadata;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for metadata errors
    pub use crate::{bad_data, bad_request, ErrorKind, ErrorMetadata, MetadataError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
