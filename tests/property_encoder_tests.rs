use chartjs_rs::core::{Value, ValueMap};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::Number),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9 '<>/\\\\]{0,12}".prop_map(Value::String),
        Just(Value::Null),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 48, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn rendering_is_deterministic(value in tree()) {
        let first = value.to_js();
        let second = value.clone().to_js();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn object_contains_each_key_once_without_trailing_comma(
        keys in proptest::collection::hash_set("[a-z][a-zA-Z0-9]{0,8}", 1..12),
        seed in any::<i32>()
    ) {
        let map: ValueMap = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), Value::from(i64::from(seed) + index as i64)))
            .collect();
        let text = Value::Object(map).to_js();

        for key in &keys {
            let needle = format!("\n  {key}: ");
            prop_assert_eq!(text.matches(needle.as_str()).count(), 1);
        }
        prop_assert_eq!(text.matches(",\n").count(), keys.len() - 1);
        prop_assert!(!text.contains(",\n}"), "output contains a trailing comma before closing brace");
        prop_assert!(text.starts_with("{\n"), "output does not start with an opening brace line");
        prop_assert!(text.ends_with("\n}"), "output does not end with a closing brace line");
    }

    #[test]
    fn array_has_n_elements_on_one_line(items in proptest::collection::vec(any::<i32>(), 0..32)) {
        let text = Value::array(items.clone()).to_js();
        prop_assert!(text.starts_with('['));
        prop_assert!(text.ends_with(']'));
        prop_assert!(!text.contains('\n'));
        let inner = &text[1..text.len() - 1];
        let count = if inner.is_empty() { 0 } else { inner.split(", ").count() };
        prop_assert_eq!(count, items.len());
    }

    #[test]
    fn integers_render_without_fraction(n in any::<i32>()) {
        prop_assert_eq!(Value::from(n).to_js(), n.to_string());
        prop_assert_eq!(Value::from(f64::from(n)).to_js(), n.to_string());
    }

    #[test]
    fn ordinary_numbers_avoid_exponent_and_round_trip(n in -1.0e15f64..1.0e15) {
        let text = Value::Number(n).to_js();
        prop_assert!(!text.contains('e'));
        let parsed: f64 = text.parse().expect("decimal text");
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn string_literals_stay_on_one_line_and_cannot_close_script(text in "\\PC{0,24}") {
        let rendered = Value::String(text).to_js();
        prop_assert!(rendered.starts_with('\''));
        prop_assert!(rendered.ends_with('\''));
        prop_assert!(!rendered.contains('\n'));
        prop_assert!(!rendered.contains("</"));
    }
}
