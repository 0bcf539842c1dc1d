use chartjs_rs::core::{JsCode, JsEncoder, Value, ValueMap, to_js_literal};

#[test]
fn scalars_render_as_js_literals() {
    assert_eq!(Value::from(0.4).to_js(), "0.4");
    assert_eq!(Value::from(100).to_js(), "100");
    assert_eq!(Value::from(100.0).to_js(), "100");
    assert_eq!(Value::from(-3.25).to_js(), "-3.25");
    assert_eq!(Value::from(true).to_js(), "true");
    assert_eq!(Value::from(false).to_js(), "false");
    assert_eq!(Value::Null.to_js(), "null");
}

#[test]
fn plain_strings_are_single_quoted() {
    assert_eq!(Value::from("hello").to_js(), "'hello'");
    assert_eq!(Value::infer_text("hello").to_js(), "'hello'");
}

#[test]
fn code_renders_unquoted() {
    assert_eq!(
        Value::infer_text("function(v){return v}").to_js(),
        "function(v){return v}"
    );
    assert_eq!(Value::from(JsCode::new("(ctx) => ctx.raw")).to_js(), "(ctx) => ctx.raw");
    assert_eq!(Value::raw("Chart.helpers").to_js(), "Chart.helpers");
}

#[test]
fn explicit_strings_are_never_sniffed() {
    // Only `infer_text` applies the code heuristic.
    assert_eq!(Value::from("function keys").to_js(), "'function keys'");
    assert_eq!(Value::from("a => b").to_js(), "'a => b'");
}

#[test]
fn non_finite_numbers_degrade_to_null() {
    assert_eq!(Value::from(f64::NAN).to_js(), "null");
    assert_eq!(Value::from(f64::INFINITY).to_js(), "null");
}

#[test]
fn arrays_stay_on_one_line() {
    let value = Value::array(vec![Value::from(10), Value::from(20), Value::from(15)]);
    assert_eq!(value.to_js(), "[10, 20, 15]");
    assert_eq!(Value::Array(Vec::new()).to_js(), "[]");
}

#[test]
fn nested_objects_indent_two_spaces_per_level() {
    let value = Value::object()
        .field("responsive", &true)
        .value(
            "plugins",
            Value::object()
                .value("legend", Value::object().field("display", &false).build())
                .build(),
        )
        .value("labels", vec!["a", "b"])
        .build();
    let expected = "{\n  responsive: true,\n  plugins: {\n    legend: {\n      display: false\n    }\n  },\n  labels: ['a', 'b']\n}";
    assert_eq!(value.to_js(), expected);
}

#[test]
fn objects_inside_arrays_keep_the_array_depth() {
    let dataset = Value::object().field("label", "S").field("hidden", &false).build();
    let value = Value::object()
        .value("datasets", Value::Array(vec![dataset.clone(), dataset]))
        .build();
    let expected = "{\n  datasets: [{\n    label: 'S',\n    hidden: false\n  }, {\n    label: 'S',\n    hidden: false\n  }]\n}";
    assert_eq!(to_js_literal(&value), expected);
}

#[test]
fn empty_object_renders_braces() {
    assert_eq!(Value::Object(ValueMap::new()).to_js(), "{}");
    let value = Value::object().value("options", Value::object().build()).build();
    assert_eq!(value.to_js(), "{\n  options: {}\n}");
}

#[test]
fn insertion_order_is_preserved() {
    let value = Value::object()
        .field("zeta", &1)
        .field("alpha", &2)
        .field("mid", &3)
        .build();
    assert_eq!(value.to_js(), "{\n  zeta: 1,\n  alpha: 2,\n  mid: 3\n}");
}

#[test]
fn non_identifier_keys_are_quoted() {
    let value = Value::object().field("y-axis-1", &1).field("x", &2).build();
    assert_eq!(value.to_js(), "{\n  'y-axis-1': 1,\n  x: 2\n}");
}

#[test]
fn string_content_is_escaped() {
    assert_eq!(Value::from("it's").to_js(), r"'it\'s'");
    assert_eq!(Value::from("a\nb").to_js(), r"'a\nb'");
    assert_eq!(Value::from(r"C:\tmp").to_js(), r"'C:\\tmp'");
    assert_eq!(Value::from("</script>").to_js(), r"'<\/script>'");
}

#[test]
fn encoder_depth_offsets_every_line() {
    let value = Value::object().field("a", &1).build();
    let text = JsEncoder::default().encode_at(&value, 2);
    assert_eq!(text, "{\n      a: 1\n    }");
}

#[test]
fn serde_values_convert_in_order() {
    #[derive(serde::Serialize)]
    struct Format {
        style: &'static str,
        currency: &'static str,
        #[serde(rename = "minimumFractionDigits")]
        minimum_fraction_digits: u8,
    }

    let value = Value::from_serialize(&Format {
        style: "currency",
        currency: "USD",
        minimum_fraction_digits: 2,
    });
    assert_eq!(
        value.to_js(),
        "{\n  style: 'currency',\n  currency: 'USD',\n  minimumFractionDigits: 2\n}"
    );
}
