#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum KitforgeError {
    #[error("Archive not found: {path}")]
    #[diagnostic(help("Check the path passed to --zip"))]
    ArchiveNotFound { path: PathBuf },

    #[error("Template variant not found: {slug}/{variant}")]
    #[diagnostic(help("Ingest the template first, or check the --slug and --variant values"))]
    VariantNotFound {
        slug: String,
        variant: String,
        path: PathBuf,
    },

    #[error("Failed to extract archive {path}")]
    #[diagnostic(help("The file is not a readable zip archive"))]
    CorruptArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Catalog manifest at {path} could not be read as a catalog")]
    #[diagnostic(help("The manifest must be a JSON object with a 'templates' array"))]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize catalog manifest for {path}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {kind} name '{name}'")]
    #[diagnostic(help("Names must be non-empty path components: no '/', '\\', '.' or '..'"))]
    InvalidName { kind: &'static str, name: String },

    #[error("Failed to parse {path}")]
    #[diagnostic(help("Check the TOML syntax in your kitforge config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Glob pattern error: {pattern}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Kit template rendering failed for {file}")]
    RenderError {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, KitforgeError>;
