use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChartError, ChartResult};

/// Identifier of a chart container: the canvas `id` attribute and the key of
/// the page-wide chart registry.
///
/// Only `[A-Za-z0-9_-]` is accepted so the id can be embedded in HTML
/// attributes and JavaScript string literals without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChartId(String);

impl ChartId {
    pub fn new(id: impl Into<String>) -> ChartResult<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(id))
        } else {
            Err(ChartError::InvalidChartId(id))
        }
    }

    /// Fresh `chart-xxxxxxxx` id taken from a random v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(format!("chart-{}", &uuid[..8]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a JavaScript identifier fragment: `-` becomes `$`.
    ///
    /// Ids never contain `$`, so distinct ids always give distinct names.
    #[must_use]
    pub fn js_ident(&self) -> String {
        self.0.replace('-', "$")
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ChartId {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ChartId {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChartId> for String {
    fn from(id: ChartId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_unsafe_ids() {
        assert_eq!(ChartId::new(""), Err(ChartError::InvalidChartId(String::new())));
        assert!(ChartId::new("a b").is_err());
        assert!(ChartId::new("x'); alert(1);//").is_err());
        assert!(ChartId::new("sales-2024_q1").is_ok());
    }

    #[test]
    fn generated_ids_are_well_formed_and_distinct() {
        let first = ChartId::generate();
        let second = ChartId::generate();
        assert_ne!(first, second);
        for id in [&first, &second] {
            let suffix = id.as_str().strip_prefix("chart-").expect("prefix");
            assert_eq!(suffix.len(), 8);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn js_ident_replaces_hyphens() {
        let id = ChartId::new("bar-chart").expect("valid id");
        assert_eq!(id.js_ident(), "bar$chart");
    }

    #[test]
    fn js_ident_keeps_hyphen_and_underscore_apart() {
        let hyphen = ChartId::new("a-b").expect("valid id");
        let underscore = ChartId::new("a_b").expect("valid id");
        assert_ne!(hyphen.js_ident(), underscore.js_ident());
        assert_eq!(underscore.js_ident(), "a_b");

        let mixed = ChartId::new("a-_b").expect("valid id");
        let swapped = ChartId::new("a_-b").expect("valid id");
        assert_ne!(mixed.js_ident(), swapped.js_ident());
    }

    #[test]
    fn generated_ids_are_lowercase_hex() {
        for _ in 0..64 {
            let id = ChartId::generate();
            let suffix = id.as_str().strip_prefix("chart-").expect("prefix");
            assert!(suffix.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}
