use chartjs_rs::api::ScriptConfig;
use chartjs_rs::core::{ChartColor, ChartType, JsEncoder, ToValue};
use chartjs_rs::datasets::{BarDataset, ChartData, LineDataset};
use chartjs_rs::options::ChartOptions;
use chartjs_rs::plugins::{LegendOptions, PluginOptions, TooltipOptions};
use chartjs_rs::scales::{LinearScale, ScaleBuilder};
use chartjs_rs::{ChartConfiguration, ChartId, ChartScript};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn series(len: usize, phase: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.05 + phase).sin() * 25.0 + t * 0.01
        })
        .collect()
}

fn configuration(points: usize) -> ChartConfiguration {
    let labels: Vec<String> = (0..points).map(|i| format!("P{i}")).collect();
    let data = ChartData::new()
        .with_labels(labels)
        .with_dataset(LineDataset::series(
            "Revenue",
            &series(points, 0.0),
            ChartColor::rgb(75, 192, 192),
            0.4,
            true,
        ))
        .with_dataset(BarDataset::series(
            "Costs",
            &series(points, 1.5),
            ChartColor::rgba(255, 99, 132, 0.5),
        ));
    let options = ChartOptions::default()
        .with_plugins(
            PluginOptions::new()
                .with_legend(LegendOptions::default())
                .with_tooltip(TooltipOptions::default()),
        )
        .with_scales(
            ScaleBuilder::new()
                .y(LinearScale::new().with_begin_at_zero(true))
                .build(),
        );
    ChartConfiguration::new(ChartType::Line, data).with_options(options)
}

fn bench_configuration_to_value_1k(c: &mut Criterion) {
    let configuration = configuration(1_000);

    c.bench_function("configuration_to_value_1k", |b| {
        b.iter(|| {
            let _ = black_box(&configuration).to_value();
        })
    });
}

fn bench_encode_1k(c: &mut Criterion) {
    let value = configuration(1_000).to_value();
    let encoder = JsEncoder::default();

    c.bench_function("encode_value_tree_1k", |b| {
        b.iter(|| {
            let _ = encoder.encode(black_box(&value));
        })
    });
}

fn bench_bootstrap_script_10k(c: &mut Criterion) {
    let configuration = configuration(10_000);
    let id = ChartId::new("bench-chart").expect("valid id");
    let script_config = ScriptConfig::default().with_store_globally(true);

    c.bench_function("bootstrap_script_10k", |b| {
        b.iter(|| {
            let script = ChartScript::new(&id, black_box(&configuration), &script_config);
            let _ = script.render();
        })
    });
}

criterion_group!(
    benches,
    bench_configuration_to_value_1k,
    bench_encode_1k,
    bench_bootstrap_script_10k
);
criterion_main!(benches);
