use chart_config::Chart;
use chart_config::core::{
    ConfigNode, LiteralValue, MergeEngine, MergeMode, OptionFields, OptionValue, SeriesType,
    option_fields,
};
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_chart(points: usize, series: usize) -> Chart {
    let mut chart = Chart::with_defaults();
    chart
        .set_start_date(1_700_000_000_i64)
        .expect("valid start date");
    for index in 0..series {
        let data: Vec<f64> = (0..points).map(|i| (i as f64 * 0.5).sin()).collect();
        chart
            .add_data_set(
                data,
                SeriesType::Line,
                None,
                option_fields([(
                    "events",
                    OptionValue::from(ConfigNode::from_fields(
                        "events",
                        option_fields([(
                            "click",
                            LiteralValue::code(format!("function(){{ return {index}; }}")),
                        )]),
                    )),
                )]),
            )
            .expect("valid series");
    }
    chart
}

fn bench_series_serialization_10k(c: &mut Criterion) {
    let chart = build_chart(10_000, 4);

    c.bench_function("series_serialization_10k", |b| {
        b.iter(|| {
            let _ = black_box(chart.series_json().expect("serialize series"));
        })
    });
}

fn bench_date_pair_series_10k(c: &mut Criterion) {
    let origin = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid origin");
    let points: Vec<_> = (0..10_000_i64)
        .map(|minute| (origin + Duration::minutes(minute), (minute as f64 * 0.1).cos()))
        .collect();
    let mut chart = Chart::with_defaults();
    chart
        .add_data_set(points, SeriesType::Line, None, OptionFields::new())
        .expect("valid series");

    c.bench_function("date_pair_series_10k", |b| {
        b.iter(|| {
            let _ = black_box(chart.series_json().expect("serialize series"));
        })
    });
}

fn bench_options_serialization(c: &mut Criterion) {
    let chart = build_chart(10, 16);

    c.bench_function("options_serialization", |b| {
        b.iter(|| {
            let _ = black_box(chart.options_json().expect("serialize options"));
        })
    });
}

fn bench_merge_update(c: &mut Criterion) {
    let fields: OptionFields = (0..64)
        .map(|i| {
            (
                format!("field{i}"),
                OptionValue::from(ConfigNode::from_fields(
                    format!("field{i}"),
                    option_fields([
                        ("enabled", OptionValue::Bool(true)),
                        ("width", OptionValue::from(i)),
                    ]),
                )),
            )
        })
        .collect();

    c.bench_function("merge_update_64_nested", |b| {
        b.iter(|| {
            let mut node = ConfigNode::new("chart");
            MergeEngine::update(&mut node, black_box(fields.clone()), MergeMode::Merge)
                .expect("update options");
            black_box(node.len())
        })
    });
}

criterion_group!(
    benches,
    bench_series_serialization_10k,
    bench_date_pair_series_10k,
    bench_options_serialization,
    bench_merge_update
);
criterion_main!(benches);
