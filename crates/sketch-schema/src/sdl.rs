//! Reader for a single SDL type extension
//!
//! The fragment is parsed with `graphql-parser`, then checked to be exactly
//! one `extend type Name { ... }` block adding uniquely named fields.

use crate::error::{SchemaError, SchemaResult};
use graphql_parser::schema::{self as gql, Definition, Document, Type, TypeExtension as GqlExtension};
use graphql_parser::Pos;
use std::fmt;

/// Deepest `[` nesting accepted in a field type
pub const MAX_TYPE_DEPTH: usize = 32;

/// Type reference on a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Named type, e.g. `Float`
    Named(String),
    /// List of an inner type, e.g. `[Float]`
    List(Box<TypeRef>),
    /// Non-null wrapper, e.g. `Float!`
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Named type
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// List of `inner`
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Non-null `inner`
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Innermost named type
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }

    /// Check if this is a list (possibly non-null)
    #[must_use]
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Field added by an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Field type
    pub ty: TypeRef,
}

/// Parsed `extend type` fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExtension {
    type_name: String,
    fields: Vec<FieldDefinition>,
}

impl TypeExtension {
    /// Parse a single type extension
    ///
    /// # Errors
    /// - [`SchemaError::Parse`] if the text is not valid SDL
    /// - [`SchemaError::Syntax`] if it is valid SDL but not one object
    ///   extension adding uniquely named fields
    pub fn parse(sdl: &str) -> SchemaResult<Self> {
        check_nesting(sdl)?;

        let document: Document<'_, String> =
            gql::parse_schema(sdl).map_err(|e| SchemaError::parse(e.to_string()))?;

        let mut definitions = document.definitions.into_iter();
        let extension = match definitions.next() {
            Some(Definition::TypeExtension(GqlExtension::Object(ext))) => ext,
            Some(other) => {
                return Err(syntax_at(definition_pos(&other), "expected 'extend type' definition"));
            }
            None => return Err(SchemaError::syntax(1, 1, "expected 'extend type' definition")),
        };
        if let Some(extra) = definitions.next() {
            return Err(syntax_at(definition_pos(&extra), "expected a single extension"));
        }

        if extension.fields.is_empty() {
            return Err(syntax_at(
                extension.position,
                format!("extension of '{}' adds no fields", extension.name),
            ));
        }

        let mut fields: Vec<FieldDefinition> = Vec::with_capacity(extension.fields.len());
        for field in extension.fields {
            if fields.iter().any(|f| f.name == field.name) {
                return Err(syntax_at(field.position, format!("duplicate field '{}'", field.name)));
            }
            fields.push(FieldDefinition {
                ty: TypeRef::from(&field.field_type),
                name: field.name,
            });
        }

        tracing::debug!(type_name = %extension.name, fields = fields.len(), "Parsed type extension");
        Ok(Self {
            type_name: extension.name,
            fields,
        })
    }

    /// Extended type name
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fields in declaration order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl From<&Type<'_, String>> for TypeRef {
    fn from(ty: &Type<'_, String>) -> Self {
        match ty {
            Type::NamedType(name) => Self::named(name.as_str()),
            Type::ListType(inner) => Self::list(Self::from(inner.as_ref())),
            Type::NonNullType(inner) => Self::non_null(Self::from(inner.as_ref())),
        }
    }
}

fn syntax_at(pos: Pos, message: impl Into<String>) -> SchemaError {
    SchemaError::syntax(pos.line, pos.column, message)
}

fn definition_pos(definition: &Definition<'_, String>) -> Pos {
    match definition {
        Definition::SchemaDefinition(def) => def.position,
        Definition::TypeDefinition(def) => match def {
            gql::TypeDefinition::Scalar(t) => t.position,
            gql::TypeDefinition::Object(t) => t.position,
            gql::TypeDefinition::Interface(t) => t.position,
            gql::TypeDefinition::Union(t) => t.position,
            gql::TypeDefinition::Enum(t) => t.position,
            gql::TypeDefinition::InputObject(t) => t.position,
        },
        Definition::TypeExtension(ext) => match ext {
            GqlExtension::Scalar(t) => t.position,
            GqlExtension::Object(t) => t.position,
            GqlExtension::Interface(t) => t.position,
            GqlExtension::Union(t) => t.position,
            GqlExtension::Enum(t) => t.position,
            GqlExtension::InputObject(t) => t.position,
        },
        Definition::DirectiveDefinition(def) => def.position,
    }
}

/// Reject `[` nesting deeper than [`MAX_TYPE_DEPTH`] before the recursive parse
fn check_nesting(sdl: &str) -> SchemaResult<()> {
    let (mut line, mut column) = (1, 0);
    let (mut depth, mut in_comment, mut in_string, mut escaped) = (0usize, false, false, false);

    for c in sdl.chars() {
        if c == '\n' {
            line += 1;
            column = 0;
            in_comment = false;
            continue;
        }
        column += 1;

        if in_comment {
            continue;
        }
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '#' => in_comment = true,
            '"' => in_string = true,
            '[' => {
                depth += 1;
                if depth > MAX_TYPE_DEPTH {
                    return Err(SchemaError::syntax(line, column, "type nesting too deep"));
                }
            }
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_list_of_float() {
        let ext = TypeExtension::parse("extend type Book {\n  bids: [Float]\n}\n").unwrap();
        assert_eq!(ext.type_name(), "Book");
        assert_eq!(
            ext.fields(),
            &[FieldDefinition {
                name: "bids".into(),
                ty: TypeRef::list(TypeRef::named("Float")),
            }]
        );
    }

    #[test]
    fn parse_non_null_wrappers() {
        let ext = TypeExtension::parse("extend type Book { bids: [Float!]! }").unwrap();
        let ty = &ext.field("bids").unwrap().ty;
        assert_eq!(ty.to_string(), "[Float!]!");
        assert!(ty.is_list());
        assert_eq!(ty.base_name(), "Float");
    }

    #[test]
    fn parse_commas_and_comments() {
        let sdl = "# added by auction\nextend type Book { bids: [Float], title: String # plain\n }";
        let ext = TypeExtension::parse(sdl).unwrap();
        let names: Vec<_> = ext.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["bids", "title"]);
    }

    #[test]
    fn parse_nesting_within_limit() {
        let sdl = format!(
            "extend type Book {{ bids: {}Float{} }}",
            "[".repeat(MAX_TYPE_DEPTH),
            "]".repeat(MAX_TYPE_DEPTH)
        );
        let ext = TypeExtension::parse(&sdl).unwrap();
        assert_eq!(ext.field("bids").unwrap().ty.base_name(), "Float");
    }

    #[test]
    fn reject_deep_nesting_without_overflow() {
        let sdl = format!("extend type Book {{ bids: {} }}", "[".repeat(200_000));
        let err = TypeExtension::parse(&sdl).unwrap_err();
        assert_eq!(err.to_string(), "syntax error at 1:58: type nesting too deep");
    }

    #[test]
    fn brackets_in_comments_do_not_count() {
        let sdl = format!("# {}\nextend type Book {{ bids: [Float] }}", "[".repeat(100));
        assert!(TypeExtension::parse(&sdl).is_ok());
    }

    #[test]
    fn reject_plain_type_definition() {
        let err = TypeExtension::parse("type Book { bids: [Float] }").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 1, .. }));
        assert!(err.to_string().contains("expected 'extend type' definition"));
    }

    #[test]
    fn reject_empty_document() {
        assert!(TypeExtension::parse("# nothing here\n").is_err());
    }

    #[test]
    fn reject_unclosed_list() {
        let err = TypeExtension::parse("extend type Book { bids: [Float }").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn reject_missing_brace() {
        assert!(TypeExtension::parse("extend type Book { bids: [Float]").is_err());
    }

    #[test]
    fn reject_empty_extension() {
        assert!(TypeExtension::parse("extend type Book { }").is_err());
    }

    #[test]
    fn reject_extension_without_fields_at_its_position() {
        let err = TypeExtension::parse("# header\n\nextend type Book @cached").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 3, .. }));
        assert!(err.to_string().contains("extension of 'Book' adds no fields"));
    }

    #[test]
    fn reject_duplicate_field() {
        let err = TypeExtension::parse("extend type Book {\n  bids: Float\n  bids: Int\n}").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 3, .. }));
        assert!(err.to_string().contains("duplicate field 'bids'"));
    }

    #[test]
    fn reject_second_definition() {
        let sdl = "extend type Book { bids: Float }\nextend type Author { name: String }";
        let err = TypeExtension::parse(sdl).unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 2, .. }));
        assert!(err.to_string().contains("single extension"));
    }

    #[test]
    fn reject_trailing_content() {
        assert!(TypeExtension::parse("extend type Book { bids: Float } extra").is_err());
    }
}
