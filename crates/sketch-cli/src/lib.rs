//! Sketchbook runner
//!
//! Runs the delegation, error metadata and schema sketches with inputs from
//! a [`SketchConfig`], returning serialisable reports.
//!
//! # Quick Start
//!
//! ```rust
//! use sketch_cli::prelude::*;
//!
//! let report = run_delegate(&SketchConfig::default()).unwrap();
//! assert_eq!(report.lines(), vec!["richard", "susan"]);
//! ```

pub mod config;
pub mod logging;
pub mod sketches;

// Re-exports
pub use config::{ConfigError, DelegateConfig, ErrorsConfig, SketchConfig};
pub use sketches::{
    run_delegate, run_errors, run_schema, DelegateReport, ErrorsReport, SchemaReport, SketchError,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running sketches
    pub use crate::{
        run_delegate, run_errors, run_schema, DelegateReport, ErrorsReport, SchemaReport,
        SketchConfig, SketchError,
    };
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
