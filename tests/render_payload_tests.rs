use chart_config::core::{OptionFields, SeriesType};
use chart_config::render::{DEFAULT_CSS_SOURCES, DEFAULT_JS_SOURCES, NullRenderer};
use chart_config::{Chart, ChartConfig, ChartError};

#[test]
fn payload_carries_all_documents_and_assets() {
    let mut chart = Chart::new(ChartConfig::new().with_render_to("sales")).expect("chart");
    chart
        .add_data_set([1.0, 2.0], SeriesType::Column, None, OptionFields::new())
        .expect("series");
    chart.add_js_source("https://example.org/theme.js");

    let payload = chart.build_payload().expect("payload");
    assert_eq!(payload.options, chart.options_json().expect("options"));
    assert_eq!(payload.global_options, chart.global_options_json().expect("globals"));
    assert_eq!(payload.data, chart.series_json().expect("data"));
    assert_eq!(payload.container_id, "sales");
    assert_eq!(payload.js_sources.len(), DEFAULT_JS_SOURCES.len() + 1);
    assert_eq!(payload.js_sources.last().map(String::as_str), Some("https://example.org/theme.js"));
    assert_eq!(payload.css_sources.len(), DEFAULT_CSS_SOURCES.len());
}

#[test]
fn container_style_appends_pixel_and_percent_sizes() {
    let config = ChartConfig::new()
        .with_style("border:1px solid #ccc;")
        .with_size(800, "50%");
    let chart = Chart::new(config).expect("chart");
    assert_eq!(
        chart.container_style(),
        "border:1px solid #ccc;width:800px;height:50%;"
    );

    let unsized_chart = Chart::with_defaults();
    assert_eq!(unsized_chart.container_style(), "");
}

#[test]
fn null_renderer_records_the_payload() {
    let chart = Chart::with_defaults();
    let mut renderer = NullRenderer::default();

    let markup = chart.render_with(&mut renderer).expect("render");
    assert!(markup.is_empty());
    assert_eq!(renderer.render_count, 1);
    let payload = renderer.last_payload.expect("payload kept");
    assert_eq!(payload.container_id, "container");
    assert!(payload.options.starts_with(r#"{"chart":"#));
}

#[test]
fn renderer_rejects_container_ids_with_whitespace() {
    let chart = Chart::new(ChartConfig::new().with_render_to("my chart")).expect("chart");
    let mut renderer = NullRenderer::default();
    assert!(matches!(
        chart.render_with(&mut renderer),
        Err(ChartError::InvalidData(_))
    ));
    assert_eq!(renderer.render_count, 0);
}

#[test]
fn payload_serializes_for_out_of_process_renderers() {
    let chart = Chart::with_defaults();
    let payload = chart.build_payload().expect("payload");
    let json = payload.to_json_pretty().expect("payload json");
    assert!(json.contains("\"container_id\": \"container\""));
}
