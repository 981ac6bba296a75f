//! Testing utilities for sketchbook workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use sketch_delegate::{BackingData, Delegate, Template};
use sketch_errmeta::ErrorMetadata;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn person_template() -> Arc<Template> {
    Template::person().shared()
}

pub fn richard() -> BackingData {
    BackingData::named("richard")
}

pub fn susan() -> BackingData {
    BackingData::named("susan")
}

/// Delegates for richard and susan sharing one template
pub fn richard_and_susan() -> (Delegate, Delegate) {
    let template = person_template();
    (template.derive(richard()), template.derive(susan()))
}

pub fn model_field() -> ErrorMetadata {
    ErrorMetadata::new("Model", "Field")
}

/// Write `contents` to a temp `.toml` file kept alive by the returned handle
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
