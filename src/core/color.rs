use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::encoder::number_text;
use crate::core::value::{ToValue, Value};

/// CSS color string accepted by Chart.js (`rgb(...)`, `#hex`, `hsl(...)`, names).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartColor(String);

impl ChartColor {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(format!("rgb({red}, {green}, {blue})"))
    }

    #[must_use]
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self(format!("rgba({red}, {green}, {blue}, {})", alpha_text(alpha)))
    }

    /// Hex color; a missing `#` prefix is added.
    #[must_use]
    pub fn hex(hex: &str) -> Self {
        if hex.starts_with('#') {
            Self(hex.to_owned())
        } else {
            Self(format!("#{hex}"))
        }
    }

    #[must_use]
    pub fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self(format!("hsl({hue}, {saturation}%, {lightness}%)"))
    }

    #[must_use]
    pub fn hsla(hue: u16, saturation: u8, lightness: u8, alpha: f64) -> Self {
        Self(format!(
            "hsla({hue}, {saturation}%, {lightness}%, {})",
            alpha_text(alpha)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the same color with the given alpha channel.
    ///
    /// `rgb(...)`, `hsl(...)` and 3/6 digit hex forms are rewritten into their
    /// alpha variants. Colors already carrying alpha, named colors and
    /// anything unparsable are returned unchanged.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        let value = self.0.trim();
        if let Some(args) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return Self(format!("rgba({args}, {})", alpha_text(alpha)));
        }
        if let Some(args) = value.strip_prefix("hsl(").and_then(|s| s.strip_suffix(')')) {
            return Self(format!("hsla({args}, {})", alpha_text(alpha)));
        }
        if let Some((red, green, blue)) = value.strip_prefix('#').and_then(parse_hex) {
            return Self::rgba(red, green, blue, alpha);
        }
        self.clone()
    }

    #[must_use]
    pub fn red() -> Self {
        Self::rgb(255, 99, 132)
    }

    #[must_use]
    pub fn orange() -> Self {
        Self::rgb(255, 159, 64)
    }

    #[must_use]
    pub fn yellow() -> Self {
        Self::rgb(255, 205, 86)
    }

    #[must_use]
    pub fn green() -> Self {
        Self::rgb(75, 192, 192)
    }

    #[must_use]
    pub fn blue() -> Self {
        Self::rgb(54, 162, 235)
    }

    #[must_use]
    pub fn purple() -> Self {
        Self::rgb(153, 102, 255)
    }

    #[must_use]
    pub fn grey() -> Self {
        Self::rgb(201, 203, 207)
    }

    #[must_use]
    pub fn transparent() -> Self {
        Self::new("transparent")
    }

    #[must_use]
    pub fn white() -> Self {
        Self::new("white")
    }

    #[must_use]
    pub fn black() -> Self {
        Self::new("black")
    }

    /// Twelve-color palette used for automatic segment coloring.
    #[must_use]
    pub fn default_palette() -> Vec<ChartColor> {
        DEFAULT_PALETTE
            .iter()
            .map(|&(red, green, blue)| Self::rgb(red, green, blue))
            .collect()
    }
}

const DEFAULT_PALETTE: [(u8, u8, u8); 12] = [
    (255, 99, 132),
    (54, 162, 235),
    (255, 205, 86),
    (75, 192, 192),
    (153, 102, 255),
    (255, 159, 64),
    (199, 199, 199),
    (83, 102, 255),
    (255, 99, 255),
    (99, 255, 132),
    (255, 193, 7),
    (32, 201, 151),
];

fn alpha_text(alpha: f64) -> String {
    number_text(alpha.clamp(0.0, 1.0)).unwrap_or_else(|| "1".to_owned())
}

fn parse_hex(digits: &str) -> Option<(u8, u8, u8)> {
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&digits[i..=i].repeat(2));
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChartColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChartColor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl ToValue for ChartColor {
    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_formats_with_spaces() {
        assert_eq!(ChartColor::rgb(75, 192, 192).as_str(), "rgb(75, 192, 192)");
        assert_eq!(
            ChartColor::rgba(0, 0, 0, 0.8).as_str(),
            "rgba(0, 0, 0, 0.8)"
        );
    }

    #[test]
    fn with_alpha_rewrites_known_forms() {
        assert_eq!(
            ChartColor::rgb(75, 192, 192).with_alpha(0.2).as_str(),
            "rgba(75, 192, 192, 0.2)"
        );
        assert_eq!(
            ChartColor::hex("#ff0080").with_alpha(0.5).as_str(),
            "rgba(255, 0, 128, 0.5)"
        );
        assert_eq!(
            ChartColor::hex("fff").with_alpha(1.0).as_str(),
            "rgba(255, 255, 255, 1)"
        );
        assert_eq!(
            ChartColor::hsl(200, 50, 40).with_alpha(0.3).as_str(),
            "hsla(200, 50%, 40%, 0.3)"
        );
        assert_eq!(ChartColor::white().with_alpha(0.3), ChartColor::white());
    }

    #[test]
    fn hex_adds_missing_prefix() {
        assert_eq!(ChartColor::hex("336699").as_str(), "#336699");
        assert_eq!(ChartColor::hex("#336699").as_str(), "#336699");
    }

    #[test]
    fn palette_has_twelve_entries() {
        let palette = ChartColor::default_palette();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette[0], ChartColor::red());
    }
}
