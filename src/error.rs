//! Error types for loading configuration, tables and catalogs

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error_utils::{create_named_source, point_span};

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("invalid column reference '{0}'")]
    #[diagnostic(
        code(ldsheet::config::column),
        help("Use a zero-based index (2) or a spreadsheet column letter (\"C\")")
    )]
    InvalidColumn(String),

    #[error("failed to parse config: {reason}")]
    #[diagnostic(code(ldsheet::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,

        #[label("here")]
        span: Option<SourceSpan>,

        reason: String,

        #[source]
        source: serde_yaml::Error,
    },

    #[error("config does not match the expected shape: {0}")]
    #[diagnostic(
        code(ldsheet::config::shape),
        help("Run `ldsheet inspect config` without a config file to see the defaults")
    )]
    Shape(#[source] serde_json::Error),

    #[error("config file not found: {}", .0.display())]
    #[diagnostic(code(ldsheet::config::missing))]
    Missing(PathBuf),

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(ldsheet::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn from_yaml_error(error: serde_yaml::Error, content: String, path: &Path) -> Self {
        let span = error
            .location()
            .map(|location| point_span(&content, location.index()));
        let reason = error.to_string();

        Self::Parse {
            src: create_named_source(path, content),
            span,
            reason,
            source: error,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(ldsheet::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {reason}")]
    #[diagnostic(
        code(ldsheet::load::csv),
        help("Tables and catalogs are read as plain CSV; check quoting around commas")
    )]
    Csv {
        #[source_code]
        src: NamedSource<String>,

        #[label("here")]
        span: Option<SourceSpan>,

        reason: String,
    },
}

impl LoadError {
    pub fn from_csv_error(error: &csv::Error, content: &str, path: &Path) -> Self {
        let span = error
            .position()
            .and_then(|position| usize::try_from(position.byte()).ok())
            .map(|offset| point_span(content, offset));

        Self::Csv {
            src: create_named_source(path, content.to_string()),
            span,
            reason: error.to_string(),
        }
    }
}
