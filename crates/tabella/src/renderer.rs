//! Table rendering and embedding orchestration.
//!
//! [`TableRenderer`] compiles the document skeleton once at construction and
//! then turns datasets into embedded tables: notice on empty data, optional
//! heading, height computation, fragment serialization, document assembly,
//! and finally the host embed call with outer scrolling disabled.

use minijinja::Environment;

use crate::dataset::Dataset;
use crate::document::{Assets, DocumentContext, DOCUMENT_TEMPLATE, DOCUMENT_TEMPLATE_NAME};
use crate::error::RenderError;
use crate::html;
use crate::layout::{FrameLayout, DEFAULT_MAX_HEIGHT};
use crate::surface::HostSurface;
use crate::theme::Palette;

/// Notice emitted when there is nothing to render.
pub const NO_DATA_NOTICE: &str = "No data to display.";

/// Per-call rendering options.
///
/// ```rust
/// use tabella::RenderOptions;
///
/// let options = RenderOptions::new().title("Active users").max_height(500);
/// assert_eq!(options.max_height, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading text emitted ahead of the table. `None` or empty text emits
    /// no heading.
    pub title: Option<String>,
    /// Upper bound on the visible table height, in pixels.
    pub max_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: None,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl RenderOptions {
    /// Create options with no title and the default height cap.
    pub fn new() -> Self {
        RenderOptions::default()
    }

    /// Set the heading text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the height cap, in pixels.
    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }
}

/// Renders datasets into enhanced HTML tables on a host surface.
///
/// Construction compiles the document skeleton; rendering is then pure
/// string assembly plus surface calls. A renderer holds no per-call state,
/// so one instance can serve any number of renders, and the same dataset and
/// options always produce byte-identical output.
///
/// # Example
///
/// ```rust
/// use tabella::{Dataset, RecordingSurface, RenderOptions, TableRenderer};
///
/// let dataset = Dataset::builder()
///     .column("Service", ["api", "worker"])
///     .column("Status", ["up", "up"])
///     .build()?;
///
/// let renderer = TableRenderer::new()?;
/// let mut surface = RecordingSurface::new();
/// renderer.render(&dataset, &RenderOptions::default(), &mut surface)?;
///
/// let document = surface.embedded_html().expect("a document was embedded");
/// assert!(document.contains("<td>worker</td>"));
/// # Ok::<(), tabella::RenderError>(())
/// ```
pub struct TableRenderer {
    env: Environment<'static>,
    palette: Palette,
}

impl TableRenderer {
    /// Creates a renderer with the canonical palette.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateError`] if the document skeleton fails
    /// to compile.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_palette(Palette::default())
    }

    /// Creates a renderer with a custom palette.
    pub fn with_palette(palette: Palette) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
        Ok(TableRenderer { env, palette })
    }

    /// The palette this renderer styles documents with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renders `dataset` into `surface`.
    ///
    /// - An empty dataset (no rows or no columns) emits the
    ///   [`NO_DATA_NOTICE`] and returns without embedding anything.
    /// - A non-empty `options.title` is emitted as a heading first.
    /// - The document is embedded at the computed frame height with outer
    ///   scrolling disabled; scrolling happens inside the document.
    ///
    /// Row and column order are preserved exactly; sorting is client-side
    /// only and never touches `dataset`.
    pub fn render(
        &self,
        dataset: &Dataset,
        options: &RenderOptions,
        surface: &mut dyn HostSurface,
    ) -> Result<(), RenderError> {
        if dataset.is_empty() {
            return surface.notice(NO_DATA_NOTICE);
        }

        if let Some(title) = options.title.as_deref() {
            if !title.is_empty() {
                surface.heading(title)?;
            }
        }

        let layout = FrameLayout::for_rows(dataset.num_rows(), options.max_height);
        let table_html = html::table_fragment(dataset);
        let document = self.document(&table_html, layout)?;
        surface.embed_html(&document, layout.frame_height, false)
    }

    /// Assembles the full document for an already-serialized fragment.
    fn document(&self, table_html: &str, layout: FrameLayout) -> Result<String, RenderError> {
        let context = serde_json::to_value(DocumentContext {
            table_html,
            frame_height: layout.frame_height,
            scroll_height: layout.scroll_height,
            palette: &self.palette,
            assets: Assets::default(),
        })?;
        let template = self.env.get_template(DOCUMENT_TEMPLATE_NAME)?;
        Ok(template.render(&context)?)
    }
}

/// One-shot convenience: renders with a fresh default renderer and options.
///
/// Prefer holding a [`TableRenderer`] when rendering repeatedly; this
/// recompiles the skeleton on every call.
pub fn embed(dataset: &Dataset, surface: &mut dyn HostSurface) -> Result<(), RenderError> {
    TableRenderer::new()?.render(dataset, &RenderOptions::default(), surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceEvent};

    fn sample() -> Dataset {
        Dataset::builder()
            .column("Name", ["Alice", "Bob"])
            .column("Role", ["admin", "editor"])
            .build()
            .unwrap()
    }

    #[test]
    fn empty_dataset_emits_notice_only() {
        let renderer = TableRenderer::new().unwrap();
        let mut surface = RecordingSurface::new();
        renderer
            .render(&Dataset::new(), &RenderOptions::default(), &mut surface)
            .unwrap();

        assert_eq!(
            surface.into_events(),
            vec![SurfaceEvent::Notice(NO_DATA_NOTICE.to_string())]
        );
    }

    #[test]
    fn heading_precedes_the_embed() {
        let renderer = TableRenderer::new().unwrap();
        let mut surface = RecordingSurface::new();
        renderer
            .render(&sample(), &RenderOptions::new().title("People"), &mut surface)
            .unwrap();

        let events = surface.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SurfaceEvent::Heading("People".to_string()));
        assert!(matches!(events[1], SurfaceEvent::EmbedHtml { .. }));
    }

    #[test]
    fn empty_title_emits_no_heading() {
        let renderer = TableRenderer::new().unwrap();
        let mut surface = RecordingSurface::new();
        renderer
            .render(&sample(), &RenderOptions::new().title(""), &mut surface)
            .unwrap();

        assert_eq!(surface.events().len(), 1);
        assert!(matches!(surface.events()[0], SurfaceEvent::EmbedHtml { .. }));
    }

    #[test]
    fn embed_uses_frame_height_with_outer_scrolling_off() {
        let renderer = TableRenderer::new().unwrap();
        let mut surface = RecordingSurface::new();
        renderer
            .render(&sample(), &RenderOptions::default(), &mut surface)
            .unwrap();

        // 2 rows: 60 + 80 + 30 = 170, under the 350 cap.
        assert!(matches!(
            surface.events()[0],
            SurfaceEvent::EmbedHtml {
                height: 170,
                scrolling: false,
                ..
            }
        ));
    }

    #[test]
    fn custom_palette_flows_into_the_document() {
        let palette = Palette {
            header_bg: "#0B3D2E".to_string(),
            ..Palette::default()
        };
        let renderer = TableRenderer::with_palette(palette).unwrap();

        let mut surface = RecordingSurface::new();
        renderer
            .render(&sample(), &RenderOptions::default(), &mut surface)
            .unwrap();

        let document = surface.embedded_html().unwrap();
        assert!(document.contains("--header-bg: #0B3D2E;"));
    }

    #[test]
    fn one_shot_embed_matches_the_default_renderer() {
        let mut one_shot = RecordingSurface::new();
        embed(&sample(), &mut one_shot).unwrap();

        let renderer = TableRenderer::new().unwrap();
        let mut held = RecordingSurface::new();
        renderer
            .render(&sample(), &RenderOptions::default(), &mut held)
            .unwrap();

        assert_eq!(one_shot.into_events(), held.into_events());
    }
}
