//! The embedded document skeleton.
//!
//! The full HTML shell (stylesheet, pinned external resources, enhancement
//! initialization script) lives here as a compile-time template constant,
//! kept separate from the per-call data splice so the pure height and
//! fragment logic tests independently of string assembly. Only the `{{ .. }}`
//! splices vary between calls; the skeleton embeds no timestamps and no
//! generated identifiers, so output is byte-deterministic.

use serde::Serialize;

use crate::theme::Palette;

/// Pinned stylesheet of the table-enhancement library.
pub const DATATABLES_CSS_URL: &str =
    "https://cdn.datatables.net/1.13.6/css/jquery.dataTables.min.css";

/// Pinned table-enhancement library script.
pub const DATATABLES_JS_URL: &str =
    "https://cdn.datatables.net/1.13.6/js/jquery.dataTables.min.js";

/// Pinned DOM helper library the enhancement script depends on.
pub const JQUERY_JS_URL: &str = "https://code.jquery.com/jquery-3.7.0.min.js";

/// Pinned web font stylesheet.
pub const INTER_FONT_CSS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap";

/// Registered name of the document skeleton template.
pub const DOCUMENT_TEMPLATE_NAME: &str = "tabella/document.jinja";

/// The document skeleton.
///
/// Template variables:
/// - `table_html`: the serialized `<table>` fragment
/// - `frame_height`: outer height in pixels (container max-height)
/// - `scroll_height`: inner scroll-area height in pixels
/// - `palette`: stylesheet colors ([`Palette`])
/// - `assets`: pinned external resource URLs ([`Assets`])
pub const DOCUMENT_TEMPLATE: &str = r##"<html>
<head>
    <link rel="stylesheet" href="{{ assets.datatables_css }}">
    <link href="{{ assets.inter_font_css }}" rel="stylesheet">

    <style>
        :root {
            --header-bg: {{ palette.header_bg }};
            --header-text: {{ palette.header_text }};
            --row-odd: {{ palette.row_odd }};
            --row-even: {{ palette.row_even }};
            --row-hover: {{ palette.row_hover }};
            --row-divider: {{ palette.row_divider }};
        }

        body {
            margin: 0;
            padding: 0;
            font-family: 'Inter', sans-serif;
            background: transparent;
        }

        .table-container {
            max-height: {{ frame_height }}px;
            overflow: hidden;
            border-radius: 18px;
            border: 1px solid #E5E7EB;
            box-shadow: 0 6px 18px rgba(0,0,0,0.06);
            background: white;
        }

        .dataTables_scroll {
            border-radius: 18px !important;
            overflow: hidden !important;
        }

        .dataTables_scrollHead {
            border-radius: 18px 18px 0 0 !important;
            overflow: hidden !important;
        }

        .dataTables_scrollBody {
            border-radius: 0 0 18px 18px !important;
            overflow: auto !important;
        }

        table.dataTable {
            width: 100% !important;
            font-size: 13px;
            border-collapse: collapse;
            border: none !important;
        }

        table.dataTable.display tbody tr > .sorting_1,
        table.dataTable.display tbody tr > .sorting_2,
        table.dataTable.display tbody tr > .sorting_3 {
            background: inherit !important;
        }

        table.dataTable thead th {
            position: sticky;
            top: 0;
            background: var(--header-bg);
            color: var(--header-text);
            font-weight: 600;
            text-align: center !important;
            padding: 16px 14px;
            font-size: 13px;
            white-space: nowrap;
            letter-spacing: 0.3px;
        }

        table.dataTable td {
            padding: 14px 14px;
            border-bottom: 1px solid var(--row-divider);
            text-align: center !important;
            white-space: nowrap;
        }

        table.dataTable tbody tr:nth-child(odd) {
            background-color: var(--row-odd);
        }

        table.dataTable tbody tr:nth-child(even) {
            background-color: var(--row-even);
        }

        table.dataTable tbody tr:hover {
            background-color: var(--row-hover);
            transition: background 0.2s ease;
        }

        table.dataTable th,
        table.dataTable td {
            border-left: none !important;
            border-right: none !important;
        }

        .dataTables_filter,
        .dataTables_length,
        .dataTables_info {
            display: none;
        }

        .dataTables_wrapper {
            margin: 0 !important;
            padding: 0 !important;
            border-radius: 18px !important;
            overflow: hidden !important;
        }
    </style>
</head>

<body>
    <div class="table-container">
        {{ table_html }}
    </div>

    <script src="{{ assets.jquery_js }}"></script>
    <script src="{{ assets.datatables_js }}"></script>

    <script>
        $('#data-table').DataTable({
            paging: false,
            ordering: true,
            searching: false,
            info: false,
            scrollX: true,
            scrollY: "{{ scroll_height }}px",
            scrollCollapse: true
        });
    </script>
</body>
</html>
"##;

/// Pinned external resources referenced by the document skeleton.
///
/// The versions are load-bearing: the stylesheet rules and initialization
/// options in [`DOCUMENT_TEMPLATE`] target these exact releases.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Assets {
    /// Enhancement library stylesheet URL.
    pub datatables_css: &'static str,
    /// Enhancement library script URL.
    pub datatables_js: &'static str,
    /// DOM helper library URL.
    pub jquery_js: &'static str,
    /// Web font stylesheet URL.
    pub inter_font_css: &'static str,
}

impl Default for Assets {
    fn default() -> Self {
        Assets {
            datatables_css: DATATABLES_CSS_URL,
            datatables_js: DATATABLES_JS_URL,
            jquery_js: JQUERY_JS_URL,
            inter_font_css: INTER_FONT_CSS_URL,
        }
    }
}

/// Per-call values spliced into [`DOCUMENT_TEMPLATE`].
#[derive(Debug, Serialize)]
pub(crate) struct DocumentContext<'a> {
    pub table_html: &'a str,
    pub frame_height: u32,
    pub scroll_height: i64,
    pub palette: &'a Palette,
    pub assets: Assets,
}
