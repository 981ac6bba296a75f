//! The Book fixture consumed by the harness

use crate::error::SchemaResult;
use crate::resolver::ResolverMap;
use crate::sdl::TypeExtension;
use serde_json::Value;

/// Type extension text, exported unparsed
pub const TYPE_DEFS: &str = "extend type Book {\n  bids: [Float]\n}\n";

/// Constant returned by the `Book.title` resolver
pub const BOOK_TITLE: &str = "The Great Book";

fn book_title() -> Value {
    Value::String(BOOK_TITLE.to_string())
}

/// Resolver map for the fixture
#[must_use]
pub fn resolvers() -> ResolverMap {
    ResolverMap::new().with("Book", "title", book_title)
}

/// Both fixture exports bundled for a harness
#[derive(Debug, Clone)]
pub struct SchemaFixture {
    /// Unparsed type extension
    pub type_defs: &'static str,
    /// Resolver map
    pub resolvers: ResolverMap,
}

impl SchemaFixture {
    /// The Book fixture
    #[must_use]
    pub fn book() -> Self {
        Self {
            type_defs: TYPE_DEFS,
            resolvers: resolvers(),
        }
    }

    /// Read the type extension
    ///
    /// # Errors
    /// Returns [`SchemaError`](crate::SchemaError) if the text is malformed.
    pub fn extension(&self) -> SchemaResult<TypeExtension> {
        TypeExtension::parse(self.type_defs)
    }
}

impl Default for SchemaFixture {
    fn default() -> Self {
        Self::book()
    }
}
