use chartjs_rs::core::{ChartColor, ChartPoint, ChartValue, Value, numbers};
use chartjs_rs::datasets::{
    BarDataset, BaseDataset, BorderRadius, BorderSkipped, ChartData, ChartDataset, ChartFill,
    CutoutValue, DoughnutDataset, LineDataset, PieDataset,
};

fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("dataset renders an object")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn filled_line_series_renders_expected_members() {
    let dataset = LineDataset::series(
        "Sales",
        &[10.0, 20.0, 15.0],
        ChartColor::rgb(75, 192, 192),
        0.4,
        true,
    );
    let text = ChartDataset::to_value(&dataset).to_js();

    assert!(text.contains("label: 'Sales'"));
    assert!(text.contains("data: [10, 20, 15]"));
    assert!(text.contains("borderColor: 'rgb(75, 192, 192)'"));
    assert!(text.contains("backgroundColor: 'rgba(75, 192, 192, 0.2)'"));
    assert!(text.contains("tension: 0.4"));
    assert!(text.contains("fill: 'origin'"));
    assert!(!text.contains("order"));
}

#[test]
fn line_dataset_emits_base_members_first() {
    let dataset = LineDataset::new("Visitors", numbers(&[1, 2, 3]));
    let keys = keys(&ChartDataset::to_value(&dataset));
    assert_eq!(&keys[..4], ["label", "data", "hidden", "borderWidth"]);
    assert!(keys.contains(&"pointStyle".to_owned()));
    assert!(!keys.contains(&"fill".to_owned()));
}

#[test]
fn line_fill_targets() {
    let dataset = LineDataset::new("a", numbers(&[1.0])).with_fill(ChartFill::Relative(-1));
    assert_eq!(
        ChartDataset::to_value(&dataset).get("fill"),
        Some(&Value::from("-1"))
    );

    let dataset = LineDataset::new("a", numbers(&[1.0])).with_fill(ChartFill::End);
    assert_eq!(
        ChartDataset::to_value(&dataset).get("fill"),
        Some(&Value::from("end"))
    );
}

#[test]
fn order_is_emitted_only_when_set() {
    let dataset = BaseDataset::from_numbers("a", &[1.0]);
    assert!(ChartDataset::to_value(&dataset).get("order").is_none());

    let dataset = dataset.with_order(3);
    assert_eq!(ChartDataset::to_value(&dataset).get("order"), Some(&Value::Number(3.0)));
}

#[test]
fn missing_values_render_null_inside_data() {
    let data = vec![ChartValue::from(1.0), ChartValue::Null, ChartValue::from(3.0)];
    let dataset = LineDataset::new("gaps", data).with_span_gaps(true);
    let text = ChartDataset::to_value(&dataset).to_js();
    assert!(text.contains("data: [1, null, 3]"));
    assert!(text.contains("spanGaps: true"));
}

#[test]
fn scatter_points_render_as_inline_objects() {
    let data = vec![ChartPoint::xy(1.0, 2.0).into(), ChartPoint::bubble(3.0, 4.0, 5.0).into()];
    let dataset = BaseDataset::new("points", data);
    let text = ChartDataset::to_value(&dataset).to_js();
    assert!(text.contains("data: [{\n    x: 1,\n    y: 2\n  }, {\n    x: 3,\n    y: 4,\n    r: 5\n  }]"));
}

#[test]
fn bar_series_defaults() {
    let dataset = BarDataset::series("Revenue", &[5.0, 7.5], ChartColor::hex("36a2eb"));
    let value = ChartDataset::to_value(&dataset);

    assert_eq!(value.get("backgroundColor"), Some(&Value::from("#36a2eb")));
    assert_eq!(value.get("borderColor"), Some(&Value::from("#36a2eb")));
    assert_eq!(value.get("borderWidth"), Some(&Value::Number(0.0)));
    assert_eq!(value.get("barPercentage"), Some(&Value::Number(0.9)));
    assert_eq!(value.get("categoryPercentage"), Some(&Value::Number(0.8)));
    assert_eq!(value.get("borderSkipped"), Some(&Value::from("start")));
    assert_eq!(value.get("grouped"), Some(&Value::Bool(true)));
    assert!(value.get("stack").is_none());
}

#[test]
fn bar_stack_and_radius() {
    let dataset = BarDataset::series("a", &[1.0], ChartColor::blue())
        .with_stack("group-1")
        .with_border_radius(BorderRadius::TopBottom {
            top: 4.0,
            bottom: 0.0,
        })
        .with_border_skipped(BorderSkipped::None);
    let text = ChartDataset::to_value(&dataset).to_js();

    assert!(text.contains("stack: 'group-1'"));
    assert!(text.contains("borderRadius: {\n    top: 4,\n    bottom: 0\n  }"));
    assert!(text.contains("borderSkipped: false"));
}

#[test]
fn pie_palette_colours_each_segment() {
    let dataset = PieDataset::with_palette(&[30.0, 50.0, 20.0]);
    let value = ChartDataset::to_value(&dataset);

    assert_eq!(value.get("label"), Some(&Value::from(PieDataset::DEFAULT_LABEL)));
    let colors = value
        .get("backgroundColor")
        .and_then(Value::as_array)
        .expect("per-segment colours");
    assert_eq!(colors.len(), 3);
    assert_eq!(value.get("circumference"), Some(&Value::Number(360.0)));
    assert_eq!(value.get("hoverOffset"), Some(&Value::Number(4.0)));
    assert!(value.get("hoverBackgroundColor").is_none());
}

#[test]
fn pie_without_colour_list_falls_back_to_single_colour() {
    let dataset = PieDataset::new(numbers(&[1.0, 2.0])).with_border_color(ChartColor::white());
    let value = ChartDataset::to_value(&dataset);
    assert_eq!(value.get("borderColor"), Some(&Value::from("white")));
    assert!(value.get("backgroundColor").is_none());
}

#[test]
fn doughnut_appends_cutout_after_pie_members() {
    let dataset = DoughnutDataset::with_palette(&[1.0, 2.0]);
    let value = ChartDataset::to_value(&dataset);

    assert_eq!(value.get("label"), Some(&Value::from(DoughnutDataset::DEFAULT_LABEL)));
    assert_eq!(value.get("cutout"), Some(&Value::from("50%")));
    assert_eq!(keys(&value).last().map(String::as_str), Some("cutout"));

    let dataset = dataset.with_cutout(CutoutValue::Pixels(80.0));
    assert_eq!(ChartDataset::to_value(&dataset).get("cutout"), Some(&Value::Number(80.0)));
}

#[test]
fn chart_data_keeps_dataset_order() {
    let data = ChartData::new()
        .with_labels(["Jan", "Feb"])
        .with_dataset(LineDataset::new("first", numbers(&[1.0, 2.0])))
        .with_dataset(BarDataset::new("second", numbers(&[3.0, 4.0])));
    assert_eq!(data.dataset_count(), 2);

    let text = chartjs_rs::core::ToValue::to_value(&data).to_js();
    let first = text.find("label: 'first'").expect("first dataset");
    let second = text.find("label: 'second'").expect("second dataset");
    assert!(first < second);
    assert!(text.starts_with("{\n  labels: ['Jan', 'Feb'],\n  datasets: [{"));
}
