use chart_config::core::{GlobalSection, OptionValue, Section};
use chart_config::{Chart, ChartConfig, ChartError};
use serde_json::json;

#[test]
fn chart_config_json_roundtrip() {
    let config = ChartConfig::new()
        .with_render_to("sales")
        .with_style("border:1px solid #ccc;")
        .with_size(800, "50%")
        .with_background_color("#fff")
        .with_margins(10.0, 20.0, 30.0, 40.0)
        .with_section_options("title", json!({"text": "Quarterly"}));

    let serialized = config.to_json_pretty().expect("serialize config");
    let parsed = ChartConfig::from_json_str(&serialized).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = ChartConfig::from_json_str("{}").expect("parse empty config");
    assert_eq!(parsed, ChartConfig::default());
    assert_eq!(parsed.render_to, "container");
    assert!(!parsed.suppress_errors);
}

#[test]
fn invalid_json_is_reported_as_invalid_data() {
    assert!(matches!(
        ChartConfig::from_json_str("{not json"),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn chart_keywords_land_in_chart_section() {
    let config = ChartConfig::new()
        .with_render_to("sales")
        .with_size(800, "50%")
        .with_background_color("#eee")
        .with_margins(10.0, 20.0, 30.0, 40.0)
        .with_events("{load: function() { this.reflow(); }}");
    let chart = Chart::new(config).expect("chart");

    let section = chart.section(Section::Chart);
    assert_eq!(section.get("renderTo"), Some(&OptionValue::from("sales")));
    assert_eq!(section.get("width"), Some(&OptionValue::Integer(800)));
    assert_eq!(section.get("height"), Some(&OptionValue::from("50%")));
    assert_eq!(section.get("marginLeft"), Some(&OptionValue::Float(40.0)));
    assert_eq!(chart.chart_background(), Some("#eee"));
    assert_eq!(chart.container_id(), "sales");

    let json = chart.options_json().expect("serialize");
    assert!(json.contains(r#""events":{load: function() { this.reflow(); }}"#));
}

#[test]
fn section_options_merge_after_defaults() {
    let config = ChartConfig::new()
        .with_section_options("title", json!({"text": "Quarterly"}))
        .with_section_options("legend", json!({"itemStyle": {"color": "#333"}}))
        .with_section_options("lang", json!({"thousandsSep": ","}));
    let chart = Chart::new(config).expect("chart");

    assert_eq!(chart.title(), Some("Quarterly"));
    assert_eq!(
        chart.section(Section::Legend).get("itemStyle_color"),
        Some(&OptionValue::from("#333"))
    );
    assert_eq!(
        chart.global(GlobalSection::Lang).get("thousandsSep"),
        Some(&OptionValue::from(","))
    );
    assert_eq!(
        chart.section(Section::Credits).get("enabled"),
        Some(&OptionValue::Bool(false))
    );
}

#[test]
fn unknown_section_name_is_rejected() {
    let config = ChartConfig::new().with_section_options("sidebar", json!({"width": 10}));
    assert!(matches!(
        Chart::new(config),
        Err(ChartError::UnknownSection(name)) if name == "sidebar"
    ));
}

#[test]
fn non_object_section_options_are_rejected() {
    let config = ChartConfig::new().with_section_options("title", json!("Quarterly"));
    assert!(matches!(Chart::new(config), Err(ChartError::InvalidData(_))));
}

#[test]
fn empty_render_target_is_rejected() {
    let config = ChartConfig::new().with_render_to("  ");
    assert!(matches!(Chart::new(config), Err(ChartError::InvalidData(_))));
}
