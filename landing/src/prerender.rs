//! Static prerender of the landing page.
//!
//! Produces the page in its initial state (top of page, menu closed) as a
//! standalone HTML document, the same markup the browser build mounts.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::info;

use crate::app::Document;
use crate::error::PrerenderError;

/// Render the complete document, `<!DOCTYPE html>` included.
///
/// ```rust
/// let html = smartbudget_landing::render_page(2025);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("© 2025 Smart Budget"));
/// ```
pub fn render_page(year: i32) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <Document year=year /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Write `html` to `target`, or to stdout when `target` is `None`.
pub fn write_page(target: Option<&Path>, html: &str) -> Result<(), PrerenderError> {
    let Some(path) = target else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(PrerenderError::Stdout)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PrerenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, html).map_err(|source| PrerenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_missing_directory() {
        let dir = std::env::temp_dir().join(format!("smartbudget-prerender-{}", std::process::id()));
        let path = dir.join("site").join("index.html");

        write_page(Some(&path), "<p>ok</p>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>ok</p>");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reports_unwritable_target() {
        let dir = std::env::temp_dir().join(format!("smartbudget-blocked-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        // a directory where the file should go
        let err = write_page(Some(&dir), "<p>nope</p>").unwrap_err();

        assert!(matches!(err, PrerenderError::Write { .. }));
        assert!(err.to_string().contains("failed to write page"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
