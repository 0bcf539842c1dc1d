use tracing::warn;

use crate::core::value::Value;

/// Renders a [`Value`] tree into JavaScript object-literal source text.
///
/// Output rules:
/// - objects open with `{` and a newline, place one `key: value` entry per
///   line indented one unit deeper, join entries with `,\n` and close on their
///   own line at the parent depth. Empty objects render as `{}`;
/// - arrays stay on one line and do not increase the indentation depth;
/// - strings are single-quoted and escaped, raw code is emitted verbatim.
///
/// Encoding never fails: values that cannot be expressed (non-finite numbers)
/// degrade to `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsEncoder {
    indent_width: usize,
}

impl Default for JsEncoder {
    fn default() -> Self {
        Self {
            indent_width: Self::DEFAULT_INDENT_WIDTH,
        }
    }
}

impl JsEncoder {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces added per object nesting level.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn indent_width(self) -> usize {
        self.indent_width
    }

    #[must_use]
    pub fn encode(self, value: &Value) -> String {
        self.encode_at(value, 0)
    }

    /// Encodes `value` as if it were nested `depth` object levels deep.
    #[must_use]
    pub fn encode_at(self, value: &Value, depth: usize) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, depth);
        out
    }

    fn write_value(self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Number(number) => match number_text(*number) {
                Some(text) => out.push_str(&text),
                None => {
                    warn!(value = %number, "non-finite number rendered as null");
                    out.push_str("null");
                }
            },
            Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
            Value::Null => out.push_str("null"),
            Value::String(text) => write_string_literal(out, text),
            Value::RawCode(code) => out.push_str(code),
            Value::Array(items) => {
                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.write_value(out, item, depth);
                }
                out.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (index, (key, member)) in map.iter().enumerate() {
                    if index > 0 {
                        out.push_str(",\n");
                    }
                    self.write_indent(out, depth + 1);
                    write_key(out, key);
                    out.push_str(": ");
                    self.write_value(out, member, depth + 1);
                }
                out.push('\n');
                self.write_indent(out, depth);
                out.push('}');
            }
        }
    }

    fn write_indent(self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.indent_width {
            out.push(' ');
        }
    }
}

/// Renders `value` with the default two-space encoder.
#[must_use]
pub fn to_js_literal(value: &Value) -> String {
    JsEncoder::default().encode(value)
}

/// Decimal text for a finite number; `None` for NaN and infinities.
///
/// Whole numbers print without a fractional part and no value ever uses
/// exponent notation. Negative zero prints as `0`.
pub(crate) fn number_text(number: f64) -> Option<String> {
    if !number.is_finite() {
        return None;
    }
    if number == 0.0 {
        return Some("0".to_owned());
    }
    Some(number.to_string())
}

/// `'<n>%'` text used by percentage-valued options (cutout, grace).
pub(crate) fn percent_text(number: f64) -> String {
    format!("{}%", number_text(number).unwrap_or_else(|| "0".to_owned()))
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_string_literal(out, key);
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_string_literal(out: &mut String, text: &str) {
    out.push('\'');
    let mut previous = None;
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            // keeps `</script>` inside a literal from closing the host tag
            '/' if previous == Some('<') => out.push_str("\\/"),
            _ => out.push(c),
        }
        previous = Some(c);
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_text_drops_trailing_zero_and_exponent() {
        assert_eq!(number_text(100.0).as_deref(), Some("100"));
        assert_eq!(number_text(0.4).as_deref(), Some("0.4"));
        assert_eq!(number_text(-0.0).as_deref(), Some("0"));
        assert_eq!(number_text(1e21).as_deref(), Some("1000000000000000000000"));
        assert_eq!(number_text(0.000_001).as_deref(), Some("0.000001"));
        assert_eq!(number_text(f64::NAN), None);
        assert_eq!(number_text(f64::NEG_INFINITY), None);
    }

    #[test]
    fn identifier_detection() {
        assert!(is_identifier("borderColor"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$el"));
        assert!(!is_identifier("y-axis-1"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn string_literal_escapes_quotes_and_script_close() {
        let mut out = String::new();
        write_string_literal(&mut out, "it's </script>\nnext\\");
        assert_eq!(out, "'it\\'s <\\/script>\\nnext\\\\'");
    }

    #[test]
    fn custom_indent_width_applies_per_level() {
        let value = Value::object()
            .value("a", Value::object().value("b", 1).build())
            .build();
        let text = JsEncoder::new().with_indent_width(4).encode(&value);
        assert_eq!(text, "{\n    a: {\n        b: 1\n    }\n}");
    }
}
