//! Sketch Schema
//!
//! Schema fixture for an external GraphQL harness: an unparsed type
//! extension and a resolver map.
//!
//! # Example
//!
//! ```rust
//! use sketch_schema::{resolvers, TypeExtension, TYPE_DEFS};
//!
//! let map = resolvers();
//! assert_eq!(map.resolve("Book", "title").unwrap(), "The Great Book");
//!
//! let ext = TypeExtension::parse(TYPE_DEFS).unwrap();
//! assert_eq!(ext.type_name(), "Book");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod fixture;
pub mod resolver;
pub mod sdl;

// Re-exports
pub use error::{SchemaError, SchemaResult};
pub use fixture::{resolvers, SchemaFixture, BOOK_TITLE, TYPE_DEFS};
pub use resolver::{Resolver, ResolverMap};
pub use sdl::{FieldDefinition, TypeExtension, TypeRef, MAX_TYPE_DEPTH};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for the schema fixture
    pub use crate::{
        resolvers, FieldDefinition, ResolverMap, SchemaError, SchemaFixture, TypeExtension,
        TypeRef, TYPE_DEFS,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
