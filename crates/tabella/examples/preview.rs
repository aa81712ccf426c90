//! Renders a sample table into a standalone page for browser preview.
//!
//! Run with `cargo run --example preview`, then open `preview.html`.

use tabella::{Dataset, FilePreviewSurface, RenderOptions, TableRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::builder()
        .column("Quarter", ["Q1", "Q2", "Q3", "Q4"])
        .column("Revenue", ["1,204", "1,480", "1,312", "1,695"])
        .column(
            "Margin",
            [
                "<b>18%</b>",
                "<b>21%</b>",
                "<b>19%</b>",
                "<b>24%</b>",
            ],
        )
        .build()?;

    let renderer = TableRenderer::new()?;
    let mut surface = FilePreviewSurface::new("preview.html");
    renderer.render(
        &dataset,
        &RenderOptions::new().title("Quarterly revenue"),
        &mut surface,
    )?;

    let path = surface.finish()?;
    println!("wrote {}", path.display());
    Ok(())
}
