//! The three sketches, run against a [`SketchConfig`]
//!
//! Each runner returns a serialisable report; printing is left to the caller.

use crate::config::SketchConfig;
use serde::Serialize;
use sketch_delegate::{BackingData, LookupError, Named, Template};
use sketch_errmeta::{bad_data, bad_request, ErrorPayload, MetadataReport};
use sketch_schema::{SchemaError, SchemaFixture, TypeExtension};

/// Errors from running a sketch
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// Delegate lookup failed
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Schema fixture failed
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Name read back from one delegate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegateRead {
    /// Name the delegate was built with
    pub backing: String,
    /// Name read through the template
    pub name: String,
}

/// Result of the delegation sketch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegateReport {
    /// Properties the shared template defines
    pub template_properties: Vec<String>,
    /// One read per delegate, in config order
    pub reads: Vec<DelegateRead>,
}

/// One constructed error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Kind, message and metadata
    #[serde(flatten)]
    pub report: MetadataReport,
    /// Public payload
    pub payload: ErrorPayload,
}

/// Result of the error metadata sketch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorsReport {
    /// Bad data, then bad request
    pub errors: Vec<ErrorEntry>,
}

/// One field added by the extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionField {
    /// Field name
    pub name: String,
    /// Field type as written
    #[serde(rename = "type")]
    pub ty: String,
}

/// Result of the schema sketch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaReport {
    /// Unparsed type extension
    pub type_defs: String,
    /// Extended type
    pub extends: String,
    /// Fields the extension adds
    pub fields: Vec<ExtensionField>,
    /// `Book.title` resolved with no arguments
    pub title: serde_json::Value,
}

/// Derive one delegate per configured name from a shared template
///
/// # Errors
/// Returns [`SketchError::Lookup`] if a name cannot be read back.
pub fn run_delegate(config: &SketchConfig) -> Result<DelegateReport, SketchError> {
    let template = Template::person().shared();
    let delegates: Vec<_> = config
        .delegate
        .names
        .iter()
        .map(|name| template.derive(BackingData::named(name.as_str())))
        .collect();

    let mut reads = Vec::with_capacity(delegates.len());
    for (delegate, backing) in delegates.iter().zip(&config.delegate.names) {
        reads.push(DelegateRead {
            backing: backing.clone(),
            name: delegate.name()?.to_string(),
        });
    }

    tracing::info!(delegates = reads.len(), "Delegation sketch complete");
    Ok(DelegateReport {
        template_properties: template.properties().into_iter().map(String::from).collect(),
        reads,
    })
}

/// Build a bad data and a bad request error with the configured metadata
#[must_use]
pub fn run_errors(config: &SketchConfig) -> ErrorsReport {
    let errors = &config.errors;
    let built = [
        bad_data(errors.bad_data_message.as_str(), errors.metadata.clone()),
        bad_request(errors.bad_request_message.as_str(), errors.metadata.clone()),
    ];

    let errors = built
        .iter()
        .map(|err| ErrorEntry {
            report: err.report(),
            payload: err.payload(),
        })
        .collect::<Vec<_>>();

    tracing::info!(errors = errors.len(), "Error metadata sketch complete");
    ErrorsReport { errors }
}

/// Read the schema fixture and invoke its resolver
///
/// # Errors
/// Returns [`SketchError::Schema`] if the fixture is malformed or unresolvable.
pub fn run_schema() -> Result<SchemaReport, SketchError> {
    let fixture = SchemaFixture::book();
    let extension: TypeExtension = fixture.extension()?;
    let title = fixture.resolvers.resolve("Book", "title")?;

    tracing::info!(extends = extension.type_name(), "Schema sketch complete");
    Ok(SchemaReport {
        type_defs: fixture.type_defs.to_string(),
        extends: extension.type_name().to_string(),
        fields: extension
            .fields()
            .iter()
            .map(|f| ExtensionField {
                name: f.name.clone(),
                ty: f.ty.to_string(),
            })
            .collect(),
        title,
    })
}

impl DelegateReport {
    /// Human-readable lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.reads.iter().map(|r| r.name.clone()).collect()
    }
}

impl ErrorsReport {
    /// Human-readable lines: one metadata record per error
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.report.kind, e.report.metadata))
            .collect()
    }
}

impl SchemaReport {
    /// Human-readable lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("extend type {}", self.extends)];
        lines.extend(self.fields.iter().map(|f| format!("  {}: {}", f.name, f.ty)));
        let title = self.title.as_str().map_or_else(|| self.title.to_string(), String::from);
        lines.push(format!("Book.title -> {title}"));
        lines
    }
}
