use chart_config::api::DEFAULT_POINT_INTERVAL_MS;
use chart_config::core::{
    DateLiteral, Formatter, LiteralValue, OptionFields, OptionValue, Section, SeriesType,
    option_fields,
};
use chart_config::{Chart, ChartError, ChartWarning};
use chrono::{TimeZone, Utc};

fn march_fifth() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn date_option(literal: DateLiteral) -> OptionValue {
    OptionValue::Literal(LiteralValue::Date(literal))
}

#[test]
fn start_date_literal_uses_zero_based_month() {
    let mut chart = Chart::with_defaults();
    let literal = chart.set_start_date(march_fifth()).expect("start date");

    assert_eq!(literal.year, 2024);
    assert_eq!(literal.month, 2);
    assert_eq!(literal.day, 5);
    assert_eq!(literal.to_string(), "Date.UTC(2024, 2, 5, 0, 0, 0)");
}

#[test]
fn unix_seconds_and_datetime_give_the_same_literal() {
    let mut chart = Chart::with_defaults();
    let from_seconds = chart
        .set_start_date(1_709_596_800_i64)
        .expect("seconds start date");
    let from_datetime = chart.set_start_date(march_fifth()).expect("datetime start date");
    assert_eq!(from_seconds, from_datetime);
}

#[test]
fn unsupported_start_date_formats_fail() {
    let mut chart = Chart::with_defaults();
    let result = chart.set_start_date("2024-03-05");
    assert!(matches!(result, Err(ChartError::UnsupportedDateFormat(_))));
    assert!(chart.pending_temporal_state().is_idle());
}

#[test]
fn start_date_marks_tooltip_and_x_axis() {
    let mut chart = Chart::with_defaults();
    chart.set_start_date(march_fifth()).expect("start date");

    assert_eq!(
        chart.section(Section::Tooltip).get("formatter"),
        Some(&OptionValue::from(Formatter::Date))
    );
    assert_eq!(
        chart.section(Section::XAxis).get("type"),
        Some(&OptionValue::from("datetime"))
    );
}

#[test]
fn start_date_back_fills_existing_entries_and_queues_for_later_series() {
    let mut chart = Chart::with_defaults();
    chart
        .add_data_set([1.0, 2.0, 3.0], SeriesType::Line, None, OptionFields::new())
        .expect("line series");

    let literal = chart.set_start_date(march_fifth()).expect("start date");
    let line = chart.plot_options(SeriesType::Line).expect("line entry");
    assert_eq!(line.get("pointStart"), Some(&date_option(literal)));
    assert_eq!(
        line.get("pointInterval"),
        Some(&OptionValue::Integer(DEFAULT_POINT_INTERVAL_MS))
    );

    let bar = chart
        .add_data_set([4.0, 5.0], SeriesType::Bar, None, OptionFields::new())
        .expect("bar series");
    assert_eq!(bar.option("pointStart"), Some(&date_option(literal)));

    let bar_entry = chart.plot_options(SeriesType::Bar).expect("bar entry");
    assert_eq!(bar_entry.get("pointStart"), Some(&date_option(literal)));
    assert!(chart.pending_temporal_state().is_idle());
}

#[test]
fn back_fill_keeps_an_existing_interval() {
    let mut chart = Chart::with_defaults();
    chart
        .ensure_series_defaults(SeriesType::Area, option_fields([("pointInterval", 3_600_000)]), false)
        .expect("area entry");
    chart.set_start_date(march_fifth()).expect("start date");

    let area = chart.plot_options(SeriesType::Area).expect("area entry");
    assert_eq!(area.get("pointInterval"), Some(&OptionValue::Integer(3_600_000)));
}

#[test]
fn explicit_interval_wins_over_queued_default() {
    let mut chart = Chart::with_defaults();
    chart.set_start_date(march_fifth()).expect("start date");
    assert_eq!(
        chart.pending_temporal_state().point_interval,
        Some(DEFAULT_POINT_INTERVAL_MS)
    );

    let warning = chart.set_interval(5_000).expect("interval");
    assert_eq!(warning, None);

    let series = chart
        .add_data_set([1.0, 2.0], SeriesType::Line, None, OptionFields::new())
        .expect("series");
    assert_eq!(series.option("pointInterval"), Some(&OptionValue::Integer(5_000)));
    let line = chart.plot_options(SeriesType::Line).expect("line entry");
    assert_eq!(line.get("pointInterval"), Some(&OptionValue::Integer(5_000)));
}

#[test]
fn interval_reaches_existing_entries_after_back_fill() {
    let mut chart = Chart::with_defaults();
    chart
        .add_data_set([1.0], SeriesType::Column, None, OptionFields::new())
        .expect("series");
    chart.set_start_date(march_fifth()).expect("start date");
    chart.set_interval(5_000).expect("interval");

    let column = chart.plot_options(SeriesType::Column).expect("column entry");
    assert_eq!(column.get("pointInterval"), Some(&OptionValue::Integer(5_000)));
}

#[test]
fn interval_without_start_date_warns_but_applies() {
    let mut chart = Chart::with_defaults();
    let warning = chart.set_interval(60_000).expect("interval");
    assert_eq!(warning, Some(ChartWarning::MissingStartDate));
    assert_eq!(chart.pending_temporal_state().point_interval, Some(60_000));

    let series = chart
        .add_data_set([1.0], SeriesType::Line, None, OptionFields::new())
        .expect("series");
    assert_eq!(series.option("pointInterval"), Some(&OptionValue::Integer(60_000)));
    assert_eq!(series.option("pointStart"), None);
}

#[test]
fn non_integer_interval_is_rejected() {
    let mut chart = Chart::with_defaults();
    assert!(matches!(
        chart.set_interval(1.5),
        Err(ChartError::InvalidIntervalType(_))
    ));
    assert!(matches!(
        chart.set_interval("daily"),
        Err(ChartError::InvalidIntervalType(_))
    ));
    assert!(chart.pending_temporal_state().is_idle());
}

#[test]
fn explicit_series_options_beat_pending_values() {
    let mut chart = Chart::with_defaults();
    chart.set_start_date(march_fifth()).expect("start date");

    let series = chart
        .add_data_set(
            [1.0],
            SeriesType::Line,
            None,
            option_fields([("pointInterval", 1_000)]),
        )
        .expect("series");
    assert_eq!(series.option("pointInterval"), Some(&OptionValue::Integer(1_000)));
}

#[test]
fn non_cartesian_series_accept_pending_values() {
    let mut chart = Chart::with_defaults();
    chart.set_start_date(march_fifth()).expect("start date");
    let series = chart
        .add_data_set([("a", 1), ("b", 2)], SeriesType::Pie, Some("Share"), OptionFields::new())
        .expect("pie series");
    assert_eq!(series.name, "Share");
    assert!(series.option("pointStart").is_some());
}

#[test]
fn unnamed_series_get_sequential_default_names() {
    let mut chart = Chart::with_defaults();
    let mut names = Vec::new();
    for _ in 0..3 {
        let series = chart
            .add_data_set([1_i64, 2, 3], SeriesType::Line, None, OptionFields::new())
            .expect("series");
        names.push(series.name.clone());
    }
    assert_eq!(names, vec!["Series 1", "Series 2", "Series 3"]);
}

#[test]
fn default_name_counts_named_series_too() {
    let mut chart = Chart::with_defaults();
    chart
        .add_data_set([1.0], SeriesType::Line, Some("Revenue"), OptionFields::new())
        .expect("named series");
    let from_options = chart
        .add_data_set([1.0], SeriesType::Line, None, option_fields([("name", "Costs")]))
        .expect("option-named series");
    assert_eq!(from_options.name, "Costs");
    assert!(from_options.option("name").is_none());

    let unnamed = chart
        .add_data_set([1.0], SeriesType::Line, None, OptionFields::new())
        .expect("unnamed series");
    assert_eq!(unnamed.name, "Series 3");
    assert_eq!(chart.series_count(), 3);
}

#[test]
fn only_the_first_series_of_a_type_seeds_plot_options() {
    let mut chart = Chart::with_defaults();
    chart
        .add_data_set([1.0], SeriesType::Line, None, option_fields([("color", "#f00")]))
        .expect("first");
    chart
        .add_data_set([1.0], SeriesType::Line, None, option_fields([("color", "#0f0")]))
        .expect("second");

    let line = chart.plot_options(SeriesType::Line).expect("line entry");
    assert_eq!(line.get("color"), Some(&OptionValue::from("#f00")));
    assert_eq!(
        chart.series()[1].option("color"),
        Some(&OptionValue::from("#0f0"))
    );
}

#[test]
fn reserved_series_keys_are_rejected_without_side_effects() {
    let mut chart = Chart::with_defaults();
    chart.set_start_date(march_fifth()).expect("start date");

    for reserved in ["data", "type"] {
        let result = chart.add_data_set(
            [1.0],
            SeriesType::Line,
            None,
            option_fields([(reserved, "override")]),
        );
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
    }
    assert_eq!(chart.series_count(), 0);
    assert!(!chart.has_plot_options(SeriesType::Line));
    assert!(chart.pending_temporal_state().point_start.is_some());

    let series = chart
        .add_data_set([1.0], SeriesType::Line, None, OptionFields::new())
        .expect("series");
    assert_eq!(series.name, "Series 1");
}

#[test]
fn non_string_name_option_is_rejected() {
    let mut chart = Chart::with_defaults();
    let result = chart.add_data_set([1.0], SeriesType::Line, None, option_fields([("name", 42)]));
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert_eq!(chart.series_count(), 0);
}
