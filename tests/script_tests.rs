use chartjs_rs::api::ScriptConfig;
use chartjs_rs::core::ChartType;
use chartjs_rs::datasets::{BaseDataset, ChartData};
use chartjs_rs::{ChartConfiguration, ChartId, ChartScript};

fn configuration() -> ChartConfiguration {
    ChartConfiguration::new(
        ChartType::Line,
        ChartData::new().with_dataset(BaseDataset::from_numbers("S", &[1.0])),
    )
}

fn render(id: &str, config: &ScriptConfig) -> String {
    let id = ChartId::new(id).expect("valid id");
    let configuration = configuration();
    ChartScript::new(&id, &configuration, config).render()
}

#[test]
fn script_binds_configuration_to_canvas() {
    let script = render("abc", &ScriptConfig::default());

    assert!(script.starts_with("(function() {\n"));
    assert!(script.ends_with("})();"));
    assert!(script.contains("  function init_abc() {\n"));
    assert!(script.contains("    if (typeof Chart === 'undefined') {\n      setTimeout(init_abc, 100);\n      return;\n    }\n"));
    assert!(script.contains("var ctx = document.getElementById('abc');"));
    assert!(script.contains("console.error('Canvas element not found: abc');"));
    assert!(script.contains("registry['abc'] = new Chart(ctx.getContext('2d'), {\n      type: 'line',"));
    assert!(!script.contains("window.chart_abc"));
}

#[test]
fn previous_instance_is_destroyed_before_construction() {
    let script = render("abc", &ScriptConfig::default());
    let destroy = script.find("registry['abc'].destroy();").expect("destroy call");
    let construct = script.find("new Chart(").expect("constructor call");
    assert!(destroy < construct);
}

#[test]
fn embedded_configuration_is_indented_two_levels() {
    let script = render("abc", &ScriptConfig::default());
    assert!(script.contains("        datasets: [{\n          label: 'S',"));
    assert!(script.contains("\n      options: {}\n    });\n"));
}

#[test]
fn waits_for_dom_content_by_default() {
    let script = render("abc", &ScriptConfig::default());
    assert!(script.contains(
        "  if (document.readyState === 'loading') {\n    document.addEventListener('DOMContentLoaded', init_abc);\n  } else {\n    init_abc();\n  }\n})();"
    ));
}

#[test]
fn immediate_initialization_skips_dom_listener() {
    let script = render("abc", &ScriptConfig::default().with_wait_for_dom(false));
    assert!(!script.contains("DOMContentLoaded"));
    assert!(script.ends_with("  }\n  init_abc();\n})();"));
    // still polls for the library
    assert!(script.contains("setTimeout(init_abc, 100);"));
}

#[test]
fn store_globally_exposes_window_property() {
    let script = render("sales-q1", &ScriptConfig::default().with_store_globally(true));
    assert!(script.contains("function init_sales$q1()"));
    assert!(script.contains("getElementById('sales-q1')"));
    assert!(script.contains("    window.chart_sales$q1 = registry['sales-q1'];\n"));
}

#[test]
fn hyphen_and_underscore_ids_get_separate_globals() {
    let config = ScriptConfig::default().with_store_globally(true);
    let hyphen = render("a-b", &config);
    let underscore = render("a_b", &config);

    assert!(hyphen.contains("    window.chart_a$b = registry['a-b'];\n"));
    assert!(hyphen.contains("function init_a$b()"));
    assert!(underscore.contains("    window.chart_a_b = registry['a_b'];\n"));
    assert!(underscore.contains("function init_a_b()"));
    assert!(!hyphen.contains("window.chart_a_b"));
}

#[test]
fn custom_globals_and_delay() {
    let config = ScriptConfig::default()
        .with_retry_delay_ms(250)
        .with_library_global("MyChart")
        .and_then(|config| config.with_registry_global("charts"))
        .expect("valid identifiers");
    let script = render("abc", &config);
    assert!(script.contains("var registry = window.charts = window.charts || {};"));
    assert!(script.contains("if (typeof MyChart === 'undefined')"));
    assert!(script.contains("setTimeout(init_abc, 250);"));
    assert!(script.contains("new MyChart(ctx.getContext('2d'),"));
}

#[test]
fn invalid_global_names_are_rejected() {
    assert!(ScriptConfig::default().with_library_global("window.Chart").is_err());
    assert!(ScriptConfig::default().with_registry_global("").is_err());
}

#[test]
fn html_wrapper_surrounds_script() {
    let id = ChartId::new("abc").expect("valid id");
    let configuration = configuration();
    let config = ScriptConfig::default();
    let script = ChartScript::new(&id, &configuration, &config);
    let html = script.to_html();
    assert!(html.starts_with("<script>\n(function() {"));
    assert!(html.ends_with("})();\n</script>"));
    assert_eq!(script.render(), script.render());
}

#[test]
fn chart_ids_validate_and_generate() {
    assert!(ChartId::new("chart_1-a").is_ok());
    assert!(ChartId::new("").is_err());
    assert!(ChartId::new("bad id").is_err());
    assert!(ChartId::new("x'); alert(1); ('").is_err());

    let first = ChartId::generate();
    let second = ChartId::generate();
    assert_ne!(first, second);
    assert!(first.as_str().starts_with("chart-"));
    assert_eq!(first.as_str().len(), "chart-".len() + 8);
}
