//! Error types for configuration loading and static export.

use std::path::PathBuf;

/// Errors produced outside the page itself (the page has no failure path).
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// Site configuration file is not valid TOML or has unknown keys.
    #[error("invalid site config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Reading configuration or writing the exported page failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Button variant name that maps to no style.
    #[error("unknown button variant '{0}' (expected primary, secondary or outline)")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
