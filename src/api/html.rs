//! Minimal HTML text helpers for the markup components.

/// Escapes text for use inside a double- or single-quoted attribute value.
pub(crate) fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Appends ` name="value"` with the value escaped.
pub(crate) fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

/// Appends a bare boolean attribute when `enabled`.
pub(crate) fn push_flag(out: &mut String, name: &str, enabled: bool) {
    if enabled {
        out.push(' ');
        out.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_attribute(r#"a&b "c" <d> 'e'"#),
            "a&amp;b &quot;c&quot; &lt;d&gt; &#39;e&#39;"
        );
    }

    #[test]
    fn flags_render_only_when_enabled() {
        let mut out = String::from("<script");
        push_flag(&mut out, "defer", true);
        push_flag(&mut out, "async", false);
        assert_eq!(out, "<script defer");
    }
}
