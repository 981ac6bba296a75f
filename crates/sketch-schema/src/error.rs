//! Error types for the schema fixture

/// Errors from resolver lookup and SDL reading
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No resolver registered for type/field pair
    #[error("no resolver for {type_name}.{field}")]
    UnknownResolver {
        /// Type name
        type_name: String,
        /// Field name
        field: String,
    },

    /// Text is not valid SDL
    #[error("sdl parse error: {message}")]
    Parse {
        /// Parser diagnostic
        message: String,
    },

    /// Valid SDL outside the accepted fragment shape
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
        /// What went wrong
        message: String,
    },
}

impl SchemaError {
    /// Create unknown resolver error
    pub fn unknown_resolver(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownResolver {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Create parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create syntax error at a position
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
