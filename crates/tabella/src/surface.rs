//! The host-embedding seam.
//!
//! [`HostSurface`] models the dashboard host's output primitives so the
//! rendering core is testable without a running UI host. The renderer only
//! ever calls three things: an informational notice, a heading, and the
//! "embed raw HTML at a pixel height" primitive.
//!
//! Two implementations ship with the crate: [`RecordingSurface`], the test
//! double used throughout this crate's own tests, and [`FilePreviewSurface`],
//! which writes a standalone page for browser preview.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// A host output surface that rendered tables are embedded into.
///
/// Implementations are assumed single-writer: one render call completes
/// before the next begins.
pub trait HostSurface {
    /// Emits an informational notice.
    fn notice(&mut self, text: &str) -> Result<(), RenderError>;

    /// Emits heading text ahead of subsequently embedded content.
    ///
    /// Hosts render this at their third heading level.
    fn heading(&mut self, text: &str) -> Result<(), RenderError>;

    /// Embeds a self-contained HTML document at the given pixel height.
    ///
    /// `scrolling` controls the host's outer scrollbar. The renderer always
    /// passes `false`: all scrolling happens inside the embedded document.
    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool) -> Result<(), RenderError>;
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A `notice` call.
    Notice(String),
    /// A `heading` call.
    Heading(String),
    /// An `embed_html` call.
    EmbedHtml {
        /// The embedded document.
        html: String,
        /// The outer pixel height.
        height: u32,
        /// The outer scrolling flag.
        scrolling: bool,
    },
}

/// Surface double that records every call in order.
///
/// Useful both for this crate's tests and for downstream embedders testing
/// their own rendering paths.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    /// The recorded events, in call order.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Consumes the surface and returns the recorded events.
    pub fn into_events(self) -> Vec<SurfaceEvent> {
        self.events
    }

    /// The document from the first `embed_html` call, if any.
    pub fn embedded_html(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            SurfaceEvent::EmbedHtml { html, .. } => Some(html.as_str()),
            _ => None,
        })
    }
}

impl HostSurface for RecordingSurface {
    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        self.events.push(SurfaceEvent::Notice(text.to_string()));
        Ok(())
    }

    fn heading(&mut self, text: &str) -> Result<(), RenderError> {
        self.events.push(SurfaceEvent::Heading(text.to_string()));
        Ok(())
    }

    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool) -> Result<(), RenderError> {
        self.events.push(SurfaceEvent::EmbedHtml {
            html: html.to_string(),
            height,
            scrolling,
        });
        Ok(())
    }
}

/// Writes everything rendered into it to a standalone HTML page.
///
/// Headings become `<h3>` elements and notices become plain paragraphs;
/// embedded documents go into sized `<iframe srcdoc>` frames, matching how
/// dashboard hosts isolate raw HTML. Call [`finish`](Self::finish) to write
/// the page.
///
/// # Example
///
/// ```rust,no_run
/// use tabella::{Dataset, FilePreviewSurface, TableRenderer, RenderOptions};
///
/// let dataset = Dataset::builder().column("n", ["1"]).build()?;
/// let mut surface = FilePreviewSurface::new("preview.html");
/// TableRenderer::new()?.render(&dataset, &RenderOptions::default(), &mut surface)?;
/// let path = surface.finish()?;
/// # Ok::<(), tabella::RenderError>(())
/// ```
#[derive(Debug)]
pub struct FilePreviewSurface {
    path: PathBuf,
    parts: Vec<String>,
}

impl FilePreviewSurface {
    /// Creates a preview surface that will write to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePreviewSurface {
            path: path.into(),
            parts: Vec::new(),
        }
    }

    /// Writes the accumulated preview page and returns its path.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::IoError`] if the parent directory does not
    /// exist or the write fails.
    pub fn finish(self) -> Result<PathBuf, RenderError> {
        validate_path(&self.path)?;
        let page = format!(
            "<!DOCTYPE html>\n<html>\n<body>\n{}\n</body>\n</html>\n",
            self.parts.join("\n")
        );
        fs::write(&self.path, page)?;
        Ok(self.path)
    }
}

impl HostSurface for FilePreviewSurface {
    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        self.parts.push(format!("<p class=\"notice\">{}</p>", text));
        Ok(())
    }

    fn heading(&mut self, text: &str) -> Result<(), RenderError> {
        self.parts.push(format!("<h3>{}</h3>", text));
        Ok(())
    }

    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool) -> Result<(), RenderError> {
        self.parts.push(format!(
            "<iframe srcdoc=\"{}\" height=\"{}\" style=\"width: 100%; border: none;\" scrolling=\"{}\"></iframe>",
            attribute_escape(html),
            height,
            if scrolling { "auto" } else { "no" },
        ));
        Ok(())
    }
}

/// Neutralizes the two characters that would terminate a `srcdoc` attribute.
///
/// This is attribute plumbing, not content escaping: the document inside the
/// frame still carries its cell markup verbatim.
fn attribute_escape(html: &str) -> String {
    html.replace('&', "&amp;").replace('"', "&quot;")
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        surface.heading("Title").unwrap();
        surface.embed_html("<html></html>", 350, false).unwrap();

        let events = surface.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SurfaceEvent::Heading("Title".to_string()));
        assert!(matches!(
            events[1],
            SurfaceEvent::EmbedHtml {
                height: 350,
                scrolling: false,
                ..
            }
        ));
    }

    #[test]
    fn embedded_html_finds_the_document() {
        let mut surface = RecordingSurface::new();
        assert!(surface.embedded_html().is_none());
        surface.notice("nothing yet").unwrap();
        surface.embed_html("<html>doc</html>", 100, false).unwrap();
        assert_eq!(surface.embedded_html(), Some("<html>doc</html>"));
    }

    #[test]
    fn file_preview_writes_headings_notices_and_frames() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("preview.html");

        let mut surface = FilePreviewSurface::new(&file_path);
        surface.heading("Report").unwrap();
        surface.embed_html("<html>\"quoted\"</html>", 200, false).unwrap();
        let written = surface.finish().unwrap();

        let content = fs::read_to_string(written).unwrap();
        assert!(content.contains("<h3>Report</h3>"));
        assert!(content.contains("height=\"200\""));
        assert!(content.contains("scrolling=\"no\""));
        assert!(content.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn file_preview_rejects_missing_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("missing").join("preview.html");

        let surface = FilePreviewSurface::new(file_path);
        let result = surface.finish();
        assert!(matches!(result, Err(RenderError::IoError(_))));
    }
}
