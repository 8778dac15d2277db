//! Error types for the DCAT-AP.de profile

use thiserror::Error;

/// Errors raised while setting up the profile or doing I/O around it.
///
/// Enrichment itself never fails; these only come out of table loading,
/// settings and the CLI.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to load mapping table '{table}' from {location}: {reason}")]
    TableLoad {
        table: &'static str,
        location: String,
        reason: String,
    },

    #[error("Malformed mapping table '{table}': {source}")]
    MalformedTable {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Invalid base URI '{uri}': {source}")]
    InvalidBaseUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid dataset record: {0}")]
    InvalidRecord(String),

    #[error("RDF syntax error: {0}")]
    Syntax(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
