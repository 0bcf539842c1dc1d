use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::JsEncoder;
use crate::error::{ChartError, ChartResult};

use super::{ChartConfiguration, ChartId};

/// Controls how the bootstrap script is generated.
///
/// Serializable so host applications can keep it next to the rest of their
/// page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Defer initialization until `DOMContentLoaded` when the document is
    /// still loading.
    #[serde(default = "default_wait_for_dom")]
    pub wait_for_dom: bool,
    /// Also expose the instance as `window.chart_<id>`.
    #[serde(default)]
    pub store_globally: bool,
    /// Delay between checks for the charting library global.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u32,
    #[serde(default = "default_library_global")]
    pub library_global: String,
    /// Window property holding live chart instances keyed by container id.
    #[serde(default = "default_registry_global")]
    pub registry_global: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            wait_for_dom: default_wait_for_dom(),
            store_globally: false,
            retry_delay_ms: default_retry_delay_ms(),
            library_global: default_library_global(),
            registry_global: default_registry_global(),
        }
    }
}

impl ScriptConfig {
    #[must_use]
    pub fn with_wait_for_dom(mut self, wait_for_dom: bool) -> Self {
        self.wait_for_dom = wait_for_dom;
        self
    }

    #[must_use]
    pub fn with_store_globally(mut self, store_globally: bool) -> Self {
        self.store_globally = store_globally;
        self
    }

    #[must_use]
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u32) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Sets the global the script waits for and constructs from.
    ///
    /// Must be a plain JavaScript identifier.
    pub fn with_library_global(mut self, name: impl Into<String>) -> ChartResult<Self> {
        self.library_global = validated_identifier(name.into())?;
        Ok(self)
    }

    /// Must be a plain JavaScript identifier.
    pub fn with_registry_global(mut self, name: impl Into<String>) -> ChartResult<Self> {
        self.registry_global = validated_identifier(name.into())?;
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize script config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse script config: {e}")))?;
        validated_identifier(config.library_global.clone())?;
        validated_identifier(config.registry_global.clone())?;
        Ok(config)
    }
}

fn default_wait_for_dom() -> bool {
    true
}

fn default_retry_delay_ms() -> u32 {
    100
}

fn default_library_global() -> String {
    "Chart".to_owned()
}

fn default_registry_global() -> String {
    "__chartjsRegistry".to_owned()
}

fn validated_identifier(name: String) -> ChartResult<String> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(name)
    } else {
        Err(ChartError::InvalidData(format!(
            "`{name}` is not a valid JavaScript identifier"
        )))
    }
}

/// Script that binds a configuration to the canvas with id `chart_id`.
///
/// The generated code:
/// 1. polls every `retry_delay_ms` until the library global exists, with no
///    upper bound on the number of attempts;
/// 2. looks up the canvas, logging to `console.error` and giving up when it
///    is missing;
/// 3. destroys the instance previously registered for the same id;
/// 4. constructs the chart and stores it in the registry.
#[derive(Debug, Clone, Copy)]
pub struct ChartScript<'a> {
    chart_id: &'a ChartId,
    configuration: &'a ChartConfiguration,
    config: &'a ScriptConfig,
}

impl<'a> ChartScript<'a> {
    #[must_use]
    pub fn new(
        chart_id: &'a ChartId,
        configuration: &'a ChartConfiguration,
        config: &'a ScriptConfig,
    ) -> Self {
        Self {
            chart_id,
            configuration,
            config,
        }
    }

    /// JavaScript source without the surrounding `<script>` tag.
    #[must_use]
    pub fn render(&self) -> String {
        let id = self.chart_id.as_str();
        let init = format!("init_{}", self.chart_id.js_ident());
        let library = &self.config.library_global;
        let registry = &self.config.registry_global;
        // The literal sits two levels deep (IIFE body, init body).
        let config_js = self
            .configuration
            .to_javascript_with(JsEncoder::default(), 2);

        let delay = self.config.retry_delay_ms;
        let store = if self.config.store_globally {
            format!(
                "    window.chart_{} = registry['{id}'];\n",
                self.chart_id.js_ident()
            )
        } else {
            String::new()
        };
        let start = if self.config.wait_for_dom {
            format!(
                "  if (document.readyState === 'loading') {{\n    document.addEventListener('DOMContentLoaded', {init});\n  }} else {{\n    {init}();\n  }}\n"
            )
        } else {
            format!("  {init}();\n")
        };

        let out = format!(
            r#"(function() {{
  var registry = window.{registry} = window.{registry} || {{}};
  function {init}() {{
    if (typeof {library} === 'undefined') {{
      setTimeout({init}, {delay});
      return;
    }}
    var ctx = document.getElementById('{id}');
    if (!ctx) {{
      console.error('Canvas element not found: {id}');
      return;
    }}
    if (registry['{id}']) {{
      registry['{id}'].destroy();
    }}
    registry['{id}'] = new {library}(ctx.getContext('2d'), {config_js});
{store}  }}
{start}}})();"#
        );

        debug!(
            chart_id = id,
            wait_for_dom = self.config.wait_for_dom,
            bytes = out.len(),
            "rendered bootstrap script"
        );
        out
    }

    /// The script wrapped in a `<script>` element.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<script>\n{}\n</script>", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_validation() {
        assert!(validated_identifier("Chart".to_owned()).is_ok());
        assert!(validated_identifier("$reg_1".to_owned()).is_ok());
        assert!(validated_identifier("1x".to_owned()).is_err());
        assert!(validated_identifier("a.b".to_owned()).is_err());
        assert!(validated_identifier(String::new()).is_err());
    }
}
