//! Dataset to HTML `<table>` fragment serialization.
//!
//! The fragment carries one `<th>` per column in column order and one
//! `<tr>`/`<td>` per row in row order. Cell values and column names are
//! spliced in verbatim, with no escaping, so pre-formatted markup passes
//! through to the rendered table (see the crate-level contract on trusted
//! input).

use crate::dataset::Dataset;

/// Element id shared by the generated table and the enhancement script's
/// initialization call.
pub const TABLE_ID: &str = "data-table";

/// Class the enhancement library's stylesheet keys on.
pub const TABLE_CLASS: &str = "display";

/// Serializes a dataset to an HTML `<table>` fragment.
///
/// The output is deterministic: the same dataset always yields the same
/// bytes.
///
/// # Example
///
/// ```rust
/// use tabella::{html, Dataset};
///
/// let dataset = Dataset::builder()
///     .column("Name", ["<b>Alice</b>"])
///     .build()
///     .unwrap();
///
/// let fragment = html::table_fragment(&dataset);
/// assert!(fragment.contains("<th>Name</th>"));
/// assert!(fragment.contains("<td><b>Alice</b></td>"));
/// ```
pub fn table_fragment(dataset: &Dataset) -> String {
    let mut html = String::new();
    html.push_str(&format!("<table id=\"{}\" class=\"{}\">\n", TABLE_ID, TABLE_CLASS));
    html.push_str("  <thead>\n    <tr>\n");
    for name in dataset.column_names() {
        html.push_str(&format!("      <th>{}</th>\n", name));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in dataset.rows() {
        html.push_str("    <tr>\n");
        for cell in row {
            html.push_str(&format!("      <td>{}</td>\n", cell));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}
