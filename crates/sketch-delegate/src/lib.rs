//! Sketch Delegate
//!
//! Property lookup through a shared accessor template.
//!
//! # Overview
//!
//! A [`Template`] is an immutable table of computed accessors. Each
//! [`Delegate`] derived from it carries its own [`BackingData`]; reading a
//! property runs the template's accessor against the delegate's data, never
//! against another delegate's.
//!
//! # Example
//!
//! ```rust
//! use sketch_delegate::{BackingData, Named, Template};
//!
//! let person = Template::person().shared();
//! let richard = person.derive(BackingData::named("richard"));
//! let susan = person.derive(BackingData::named("susan"));
//!
//! assert_eq!(richard.name().unwrap(), "richard");
//! assert_eq!(susan.name().unwrap(), "susan");
//! ```

#![warn(missing_docs)]

pub mod data;
pub mod error;
pub mod template;

// Re-exports
pub use data::{BackingData, NAME};
pub use error::LookupError;
pub use template::{Accessor, Delegate, Named, Template};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for delegation
    pub use crate::{Accessor, BackingData, Delegate, LookupError, Named, Template};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
