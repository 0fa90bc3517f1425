//! Static HTML export of the whole page.

use std::path::Path;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::config::SiteConfig;
use crate::error::{LandingError, Result};
use crate::page::LandingDocument;

/// Render the complete page as an HTML document string.
///
/// # Example
///
/// ```rust
/// use neurorastreio_landing::{render_page, SiteConfig};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(config: &SiteConfig) -> String {
    let doc = view! { <LandingDocument config=config.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page and write it to `out`, creating parent directories.
///
/// Returns the number of bytes written.
pub fn export_page(config: &SiteConfig, out: &Path) -> Result<usize> {
    let html = render_page(config);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LandingError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(out, &html).map_err(|source| LandingError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %out.display(), bytes = html.len(), "page exported");
    Ok(html.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist/site/index.html");

        let written = export_page(&SiteConfig::default(), &out).unwrap();

        let on_disk = std::fs::read_to_string(&out).unwrap();
        assert_eq!(on_disk.len(), written);
        assert!(on_disk.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn export_into_a_file_path_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = export_page(&SiteConfig::default(), &blocker.join("index.html")).unwrap_err();
        assert!(matches!(err, LandingError::Io { .. }));
    }
}
