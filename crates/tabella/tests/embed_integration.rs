//! End-to-end tests for rendering datasets into a recorded host surface.

use tabella::{
    document, Dataset, RecordingSurface, RenderOptions, SurfaceEvent, TableRenderer,
    NO_DATA_NOTICE,
};

fn service_table() -> Dataset {
    Dataset::builder()
        .column("Service", ["api", "worker", "scheduler", "gateway", "cache"])
        .column("Status", ["up", "up", "degraded", "up", "up"])
        .column("Latency", ["12ms", "40ms", "230ms", "18ms", "2ms"])
        .build()
        .unwrap()
}

fn render(dataset: &Dataset, options: RenderOptions) -> RecordingSurface {
    let renderer = TableRenderer::new().unwrap();
    let mut surface = RecordingSurface::new();
    renderer.render(dataset, &options, &mut surface).unwrap();
    surface
}

#[test]
fn empty_dataset_is_a_notice_not_a_table() {
    let surface = render(&Dataset::new(), RenderOptions::default());
    assert_eq!(
        surface.into_events(),
        vec![SurfaceEvent::Notice(NO_DATA_NOTICE.to_string())]
    );
}

#[test]
fn zero_row_dataset_is_also_a_notice() {
    let dataset = Dataset::builder()
        .column("Service", Vec::<String>::new())
        .column("Status", Vec::<String>::new())
        .build()
        .unwrap();
    let surface = render(&dataset, RenderOptions::new().title("Services"));

    // Not even the heading is emitted when there is nothing to show.
    assert_eq!(
        surface.into_events(),
        vec![SurfaceEvent::Notice(NO_DATA_NOTICE.to_string())]
    );
}

#[test]
fn five_rows_fill_the_default_cap_exactly() {
    let surface = render(&service_table(), RenderOptions::default());
    let events = surface.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        SurfaceEvent::EmbedHtml {
            html,
            height,
            scrolling,
        } => {
            assert_eq!(*height, 350);
            assert!(!scrolling);
            assert!(html.contains("max-height: 350px"));
            assert!(html.contains("scrollY: \"290px\""));
        }
        other => panic!("expected an embed event, got {:?}", other),
    }
}

#[test]
fn tall_tables_clamp_to_the_cap() {
    let rows: Vec<Vec<String>> = (0..20)
        .map(|i| vec![format!("job-{}", i), "queued".to_string()])
        .collect();
    let dataset = Dataset::from_rows(["Job", "State"], rows).unwrap();

    let surface = render(&dataset, RenderOptions::default());
    match &surface.events()[0] {
        SurfaceEvent::EmbedHtml { html, height, .. } => {
            // 60 + 20 * 40 + 30 = 890, clamped to 350.
            assert_eq!(*height, 350);
            assert!(html.contains("scrollY: \"290px\""));
        }
        other => panic!("expected an embed event, got {:?}", other),
    }
}

#[test]
fn small_caps_win_over_short_tables() {
    let dataset = Dataset::builder().column("n", ["1"]).build().unwrap();
    let surface = render(&dataset, RenderOptions::new().max_height(100));
    match &surface.events()[0] {
        SurfaceEvent::EmbedHtml { html, height, .. } => {
            assert_eq!(*height, 100);
            assert!(html.contains("scrollY: \"40px\""));
        }
        other => panic!("expected an embed event, got {:?}", other),
    }
}

#[test]
fn title_is_a_heading_before_the_table() {
    let surface = render(&service_table(), RenderOptions::new().title("Fleet status"));
    let events = surface.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], SurfaceEvent::Heading("Fleet status".to_string()));
    assert!(matches!(events[1], SurfaceEvent::EmbedHtml { .. }));
}

#[test]
fn no_title_means_no_heading() {
    let surface = render(&service_table(), RenderOptions::default());
    assert_eq!(surface.events().len(), 1);
    assert!(matches!(surface.events()[0], SurfaceEvent::EmbedHtml { .. }));
}

#[test]
fn column_and_row_order_survive_into_the_document() {
    let surface = render(&service_table(), RenderOptions::default());
    let html = surface.embedded_html().unwrap();

    let service = html.find("<th>Service</th>").unwrap();
    let status = html.find("<th>Status</th>").unwrap();
    let latency = html.find("<th>Latency</th>").unwrap();
    assert!(service < status && status < latency);

    let api = html.find("<td>api</td>").unwrap();
    let scheduler = html.find("<td>scheduler</td>").unwrap();
    let cache = html.find("<td>cache</td>").unwrap();
    assert!(api < scheduler && scheduler < cache);
}

#[test]
fn cell_markup_passes_through_unescaped() {
    let dataset = Dataset::builder()
        .column("Check", ["<span style=\"color: #16A34A\">&#10003; passed</span>"])
        .build()
        .unwrap();
    let surface = render(&dataset, RenderOptions::default());
    let html = surface.embedded_html().unwrap();
    assert!(html.contains("<td><span style=\"color: #16A34A\">&#10003; passed</span></td>"));
}

#[test]
fn document_pins_its_external_resources() {
    let surface = render(&service_table(), RenderOptions::default());
    let html = surface.embedded_html().unwrap();
    assert!(html.contains(document::DATATABLES_CSS_URL));
    assert!(html.contains(document::DATATABLES_JS_URL));
    assert!(html.contains(document::JQUERY_JS_URL));
    assert!(html.contains(document::INTER_FONT_CSS_URL));
}

#[test]
fn document_configures_the_enhancement_script() {
    let surface = render(&service_table(), RenderOptions::default());
    let html = surface.embedded_html().unwrap();
    for option in [
        "paging: false",
        "ordering: true",
        "searching: false",
        "info: false",
        "scrollX: true",
        "scrollCollapse: true",
    ] {
        assert!(html.contains(option), "init script should set {}", option);
    }
    assert!(html.contains("$('#data-table').DataTable("));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let renderer = TableRenderer::new().unwrap();
    let options = RenderOptions::new().title("Fleet status");

    let mut first = RecordingSurface::new();
    renderer.render(&service_table(), &options, &mut first).unwrap();
    let mut second = RecordingSurface::new();
    renderer.render(&service_table(), &options, &mut second).unwrap();

    assert_eq!(first.into_events(), second.into_events());
}
