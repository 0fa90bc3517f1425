//! Site configuration for the exported HTML document.
//!
//! Everything here only affects the document `<head>`; the page body is
//! fixed copy. All keys are optional:
//!
//! ```toml
//! title = "NeuroRastreio"
//! lang = "pt-BR"
//! canonical_url = "https://neurorastreio.com.br/"
//! stylesheets = ["/fonts.css"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{LandingError, Result};

pub const DEFAULT_TITLE: &str = "NeuroRastreio | Rastreio neurocognitivo funcional";
pub const DEFAULT_DESCRIPTION: &str = "Rastreio neurocognitivo funcional para crianças de 6 a 14 anos, com dados objetivos para clínicas e psicopedagogos.";
pub const DEFAULT_LANG: &str = "pt-BR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document `<title>`
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute on `<html>`
    pub lang: String,
    /// Emitted as `<link rel="canonical">` when set
    pub canonical_url: Option<String>,
    /// Extra stylesheets linked after the inlined CSS
    pub stylesheets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            lang: DEFAULT_LANG.to_string(),
            canonical_url: None,
            stylesheets: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load a config file. Missing keys fall back to [`SiteConfig::default`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LandingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| LandingError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config("title = \"Demo\"\n");
        let config = SiteConfig::load(file.path()).unwrap();

        assert_eq!(config.title, "Demo");
        assert_eq!(config.lang, DEFAULT_LANG);
        assert_eq!(config.description, DEFAULT_DESCRIPTION);
        assert!(config.canonical_url.is_none());
    }

    #[test]
    fn full_config_parses() {
        let file = write_config(
            r#"
title = "NR"
description = "desc"
lang = "en"
canonical_url = "https://example.test/"
stylesheets = ["/a.css", "/b.css"]
"#,
        );
        let config = SiteConfig::load(file.path()).unwrap();

        assert_eq!(config.lang, "en");
        assert_eq!(config.canonical_url.as_deref(), Some("https://example.test/"));
        assert_eq!(config.stylesheets, vec!["/a.css", "/b.css"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("theme = \"dark\"\n");
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LandingError::Config { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LandingError::Io { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(SiteConfig::load_or_default(None).unwrap(), SiteConfig::default());
    }
}
