use crate::core::Value;

use super::html::{push_attribute, push_flag};

/// Where the charting library is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingStrategy {
    Cdn { version: String, minified: bool },
    Npm { path: String },
    Esm { url: String },
}

/// Emits the markup that makes the library global available to bootstrap
/// scripts.
pub trait ChartLoader {
    fn loading_strategy(&self) -> LoadingStrategy;

    fn to_html(&self) -> String;
}

/// Companion plugins published on the same CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CdnPlugin {
    Datalabels,
    Zoom,
    Annotation,
    Deferred,
    Streaming,
}

impl CdnPlugin {
    #[must_use]
    pub fn package_name(self) -> &'static str {
        match self {
            Self::Datalabels => "chartjs-plugin-datalabels",
            Self::Zoom => "chartjs-plugin-zoom",
            Self::Annotation => "chartjs-plugin-annotation",
            Self::Deferred => "chartjs-plugin-deferred",
            Self::Streaming => "chartjs-plugin-streaming",
        }
    }

    /// Major version compatible with Chart.js 4.
    #[must_use]
    pub fn major_version(self) -> u32 {
        match self {
            Self::Annotation => 3,
            Self::Datalabels | Self::Zoom | Self::Deferred | Self::Streaming => 2,
        }
    }

    #[must_use]
    pub fn cdn_url(self) -> String {
        let package = self.package_name();
        format!(
            "https://cdn.jsdelivr.net/npm/{package}@{}/dist/{package}.min.js",
            self.major_version()
        )
    }
}

/// Loads Chart.js from jsDelivr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartCdn {
    pub version: String,
    pub minified: bool,
    /// Subresource integrity hash for the main bundle.
    pub integrity: Option<String>,
    pub crossorigin: Option<String>,
    pub defer: bool,
    pub load_async: bool,
    pub plugins: Vec<CdnPlugin>,
}

impl Default for ChartCdn {
    fn default() -> Self {
        Self {
            version: Self::DEFAULT_VERSION.to_owned(),
            minified: true,
            integrity: None,
            crossorigin: Some("anonymous".to_owned()),
            defer: true,
            load_async: false,
            plugins: Vec::new(),
        }
    }
}

impl ChartCdn {
    pub const DEFAULT_VERSION: &'static str = "4.4.0";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }

    #[must_use]
    pub fn with_integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: CdnPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    #[must_use]
    pub fn library_url(&self) -> String {
        let file = if self.minified {
            "chart.umd.min.js"
        } else {
            "chart.umd.js"
        };
        format!(
            "https://cdn.jsdelivr.net/npm/chart.js@{}/dist/{file}",
            self.version
        )
    }

    fn script_tag(&self, src: &str, integrity: Option<&str>, referrer_policy: bool) -> String {
        let mut out = String::from("<script");
        push_attribute(&mut out, "src", src);
        push_flag(&mut out, "async", self.load_async);
        push_flag(&mut out, "defer", self.defer);
        if let Some(integrity) = integrity {
            push_attribute(&mut out, "integrity", integrity);
        }
        if referrer_policy {
            push_attribute(&mut out, "referrerpolicy", "no-referrer");
        }
        if let Some(crossorigin) = &self.crossorigin {
            push_attribute(&mut out, "crossorigin", crossorigin);
        }
        out.push_str("></script>");
        out
    }
}

impl ChartLoader for ChartCdn {
    fn loading_strategy(&self) -> LoadingStrategy {
        LoadingStrategy::Cdn {
            version: self.version.clone(),
            minified: self.minified,
        }
    }

    /// Main bundle first, then each plugin on its own line.
    fn to_html(&self) -> String {
        let mut tags = vec![self.script_tag(&self.library_url(), self.integrity.as_deref(), true)];
        tags.extend(
            self.plugins
                .iter()
                .map(|plugin| self.script_tag(&plugin.cdn_url(), None, false)),
        );
        tags.join("\n")
    }
}

/// Loads a self-hosted copy, e.g. from `node_modules` or a static directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartNpm {
    pub path: String,
    pub defer: bool,
    pub load_async: bool,
    /// `type` attribute, e.g. `module`.
    pub script_type: Option<String>,
}

impl ChartNpm {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            defer: true,
            load_async: false,
            script_type: None,
        }
    }

    #[must_use]
    pub fn with_script_type(mut self, script_type: impl Into<String>) -> Self {
        self.script_type = Some(script_type.into());
        self
    }

    #[must_use]
    pub fn with_async(mut self, load_async: bool) -> Self {
        self.load_async = load_async;
        self
    }
}

impl ChartLoader for ChartNpm {
    fn loading_strategy(&self) -> LoadingStrategy {
        LoadingStrategy::Npm {
            path: self.path.clone(),
        }
    }

    fn to_html(&self) -> String {
        let mut out = String::from("<script");
        push_attribute(&mut out, "src", &self.path);
        push_flag(&mut out, "async", self.load_async);
        push_flag(&mut out, "defer", self.defer);
        if let Some(script_type) = &self.script_type {
            push_attribute(&mut out, "type", script_type);
        }
        out.push_str("></script>");
        out
    }
}

/// Imports the ES module build and publishes it as `window.Chart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEsm {
    pub url: String,
}

impl Default for ChartEsm {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_owned(),
        }
    }
}

impl ChartEsm {
    pub const DEFAULT_URL: &'static str = "https://cdn.jsdelivr.net/npm/chart.js@4/+esm";

    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ChartLoader for ChartEsm {
    fn loading_strategy(&self) -> LoadingStrategy {
        LoadingStrategy::Esm {
            url: self.url.clone(),
        }
    }

    fn to_html(&self) -> String {
        let specifier = Value::String(self.url.clone()).to_js();
        format!(
            "<script type=\"module\">\nimport Chart from {specifier};\nwindow.Chart = Chart;\n</script>"
        )
    }
}
