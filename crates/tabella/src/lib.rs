//! # Tabella - Embedded HTML Tables for Dashboard Surfaces
//!
//! `tabella` turns an in-memory tabular dataset into a styled, scrollable,
//! self-contained HTML document and hands it to a host dashboard's
//! "embed raw HTML" primitive with a computed display height. The embedded
//! document activates a client-side table-enhancement library (DataTables,
//! pinned by CDN URL) for column sorting and internal scrolling; the host
//! only sees an opaque HTML blob and a pixel height.
//!
//! ## Core Concepts
//!
//! - [`Dataset`]: ordered named columns of equal length, the table to render
//! - [`RenderOptions`]: optional title plus the display-height cap
//! - [`HostSurface`]: the injected host capability (notice, heading, embed)
//! - [`TableRenderer`]: compiles the document skeleton once, renders repeatedly
//! - [`Palette`]: the stylesheet colors, canonical by default
//!
//! ## Quick Start
//!
//! ```rust
//! use tabella::{Dataset, RecordingSurface, RenderOptions, SurfaceEvent, TableRenderer};
//!
//! let dataset = Dataset::builder()
//!     .column("Region", ["North", "South", "West"])
//!     .column("Revenue", ["1,204", "980", "1,566"])
//!     .build()?;
//!
//! let renderer = TableRenderer::new()?;
//! let mut surface = RecordingSurface::new();
//! renderer.render(
//!     &dataset,
//!     &RenderOptions::new().title("Revenue by region"),
//!     &mut surface,
//! )?;
//!
//! assert_eq!(surface.events().len(), 2);
//! assert!(matches!(surface.events()[0], SurfaceEvent::Heading(_)));
//! assert!(matches!(surface.events()[1], SurfaceEvent::EmbedHtml { scrolling: false, .. }));
//! # Ok::<(), tabella::RenderError>(())
//! ```
//!
//! ## Empty Data
//!
//! An empty or column-less dataset is a normal path, not an error: the
//! renderer emits an informational notice and embeds nothing.
//!
//! ```rust
//! use tabella::{Dataset, RecordingSurface, SurfaceEvent, NO_DATA_NOTICE};
//!
//! let mut surface = RecordingSurface::new();
//! tabella::embed(&Dataset::new(), &mut surface)?;
//!
//! assert_eq!(
//!     surface.events(),
//!     [SurfaceEvent::Notice(NO_DATA_NOTICE.to_string())]
//! );
//! # Ok::<(), tabella::RenderError>(())
//! ```
//!
//! ## Trusted Cell Markup
//!
//! Cell values and column names are spliced into the generated table
//! verbatim, with no escaping, so embedders can pass pre-formatted fragments
//! (badges, links, colored spans) straight through. The flip side: never
//! feed untrusted input into a [`Dataset`].
//!
//! ## Host Integration
//!
//! Implement [`HostSurface`] over your host's primitives and hand it to
//! [`TableRenderer::render`]. The renderer calls `heading` and `notice` for
//! surface text and `embed_html(html, height, scrolling)` exactly once per
//! non-empty dataset, always with `scrolling = false` (the embedded document
//! scrolls internally).

// Internal modules
pub mod dataset;
pub mod document;
mod error;
pub mod html;
pub mod layout;
pub mod renderer;
pub mod surface;
pub mod theme;

// Error type
pub use error::RenderError;

// Data model exports
pub use dataset::{Column, Dataset, DatasetBuilder};

// Layout exports
pub use layout::{FrameLayout, DEFAULT_MAX_HEIGHT, HEADER_HEIGHT, PADDING, ROW_HEIGHT};

// Renderer exports
pub use renderer::{embed, RenderOptions, TableRenderer, NO_DATA_NOTICE};

// Surface exports
pub use surface::{FilePreviewSurface, HostSurface, RecordingSurface, SurfaceEvent};

// Theme exports
pub use theme::Palette;
