//! Chat-style text components.
//!
//! Java packs describe themselves with JSON text components, Bedrock
//! manifests want a flat string with legacy `§` formatting codes. This module
//! parses the former and renders the latter.

use serde_json::Value;

use crate::error::{ConverterError, Result};

/// The section sign that prefixes every legacy formatting code.
pub const SECTION_CHAR: char = '§';

/// The sixteen legacy named colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The legacy code character (`0`-`9`, `a`-`f`).
    pub fn code(&self) -> char {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(15);
        std::char::from_digit(index as u32, 16).unwrap_or('f')
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => (0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => (0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => (0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => (0xAA, 0x00, 0xAA),
            NamedColor::Gold => (0xFF, 0xAA, 0x00),
            NamedColor::Gray => (0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xFF),
            NamedColor::Green => (0x55, 0xFF, 0x55),
            NamedColor::Aqua => (0x55, 0xFF, 0xFF),
            NamedColor::Red => (0xFF, 0x55, 0x55),
            NamedColor::LightPurple => (0xFF, 0x55, 0xFF),
            NamedColor::Yellow => (0xFF, 0xFF, 0x55),
            NamedColor::White => (0xFF, 0xFF, 0xFF),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Parse a named colour or a `#rrggbb` hex colour, downsampling the
    /// latter to the nearest named colour.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(hex, 16).ok()?;
            let rgb = ((value >> 16) as u8, (value >> 8) as u8, value as u8);
            return Some(Self::nearest(rgb));
        }
        Self::from_name(s)
    }

    fn nearest((r, g, b): (u8, u8, u8)) -> Self {
        let distance = |c: &NamedColor| {
            let (cr, cg, cb) = c.rgb();
            let dr = i32::from(r) - i32::from(cr);
            let dg = i32::from(g) - i32::from(cg);
            let db = i32::from(b) - i32::from(cb);
            dr * dr + dg * dg + db * db
        };
        Self::ALL
            .iter()
            .copied()
            .min_by_key(distance)
            .unwrap_or(NamedColor::White)
    }
}

/// Styling of a single component. `None` means "inherit from the parent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<NamedColor>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
}

impl Style {
    fn merged_over(&self, parent: &Style) -> Style {
        Style {
            color: self.color.or(parent.color),
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underlined: self.underlined.or(parent.underlined),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            obfuscated: self.obfuscated.or(parent.obfuscated),
        }
    }

    /// Decorations in legacy emission order, paired with their codes.
    fn decorations(&self) -> [(bool, char); 5] {
        [
            (self.obfuscated.unwrap_or(false), 'k'),
            (self.bold.unwrap_or(false), 'l'),
            (self.strikethrough.unwrap_or(false), 'm'),
            (self.underlined.unwrap_or(false), 'n'),
            (self.italic.unwrap_or(false), 'o'),
        ]
    }
}

/// A parsed text component tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextComponent {
    pub content: String,
    pub style: Style,
    pub children: Vec<TextComponent>,
}

impl TextComponent {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Parse any of the JSON shapes Java accepts for a component.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::text(s.clone())),
            Value::Number(n) => Ok(Self::text(n.to_string())),
            Value::Bool(b) => Ok(Self::text(b.to_string())),
            Value::Array(items) => {
                let mut items = items.iter();
                let mut parent = match items.next() {
                    Some(first) => Self::from_json(first)?,
                    None => return Ok(Self::default()),
                };
                for item in items {
                    parent.children.push(Self::from_json(item)?);
                }
                Ok(parent)
            }
            Value::Object(map) => {
                let content = if let Some(text) = map.get("text") {
                    scalar_to_string(text)
                } else if let Some(key) = map.get("translate").and_then(Value::as_str) {
                    map.get("fallback")
                        .and_then(Value::as_str)
                        .unwrap_or(key)
                        .to_string()
                } else {
                    String::new()
                };

                let style = Style {
                    color: map.get("color").and_then(Value::as_str).and_then(NamedColor::parse),
                    bold: map.get("bold").and_then(Value::as_bool),
                    italic: map.get("italic").and_then(Value::as_bool),
                    underlined: map.get("underlined").and_then(Value::as_bool),
                    strikethrough: map.get("strikethrough").and_then(Value::as_bool),
                    obfuscated: map.get("obfuscated").and_then(Value::as_bool),
                };

                let children = match map.get("extra") {
                    Some(Value::Array(extra)) => extra
                        .iter()
                        .map(Self::from_json)
                        .collect::<Result<Vec<_>>>()?,
                    Some(other) => vec![Self::from_json(other)?],
                    None => Vec::new(),
                };

                Ok(Self {
                    content,
                    style,
                    children,
                })
            }
            Value::Null => Err(ConverterError::InvalidPack {
                message: "text component must not be null".to_string(),
            }),
        }
    }

    /// Parse a component from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    /// Render with legacy `§` codes.
    pub fn to_legacy(&self) -> String {
        let mut segments = Vec::new();
        self.flatten(&Style::default(), &mut segments);

        let mut out = String::new();
        let mut current = Style::default();
        for (style, text) in segments {
            if text.is_empty() {
                continue;
            }
            if style != current {
                emit_transition(&mut out, &current, &style);
                current = style;
            }
            out.push_str(text);
        }
        out
    }

    /// Render the text content only.
    pub fn to_plain(&self) -> String {
        let mut out = self.content.clone();
        for child in &self.children {
            out.push_str(&child.to_plain());
        }
        out
    }

    fn flatten<'a>(&'a self, parent: &Style, out: &mut Vec<(Style, &'a str)>) {
        let style = self.style.merged_over(parent);
        out.push((style, &self.content));
        for child in &self.children {
            child.flatten(&style, out);
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn emit_transition(out: &mut String, current: &Style, next: &Style) {
    let drops_decoration = current
        .decorations()
        .iter()
        .zip(next.decorations().iter())
        .any(|((was, _), (is, _))| *was && !*is);
    let drops_color = current.color.is_some() && next.color.is_none();

    let mut active = *current;
    if drops_decoration || drops_color {
        out.push(SECTION_CHAR);
        out.push('r');
        active = Style::default();
    }

    if next.color.is_some() && next.color != active.color {
        if let Some(color) = next.color {
            out.push(SECTION_CHAR);
            out.push(color.code());
        }
        // A legacy colour code clears all decorations.
        active = Style {
            color: next.color,
            ..Style::default()
        };
    }

    for ((was, _), (is, code)) in active.decorations().iter().zip(next.decorations().iter()) {
        if *is && !*was {
            out.push(SECTION_CHAR);
            out.push(*code);
        }
    }
}

/// Strip legacy formatting codes from an already formatted string.
pub fn legacy_to_plain(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_CHAR {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string() {
        let component = TextComponent::from_json(&json!("Faithful 32x")).unwrap();
        assert_eq!(component.to_legacy(), "Faithful 32x");
        assert_eq!(component.to_plain(), "Faithful 32x");
    }

    #[test]
    fn test_colored_object_with_extra() {
        let component = TextComponent::from_json(&json!({
            "text": "Hello ",
            "color": "gold",
            "extra": [{"text": "world", "bold": true}]
        }))
        .unwrap();
        assert_eq!(component.to_legacy(), "§6Hello §lworld");
        assert_eq!(component.to_plain(), "Hello world");
    }

    #[test]
    fn test_reset_when_child_drops_style() {
        let component = TextComponent::from_json(&json!([
            "",
            {"text": "A", "color": "red", "italic": true},
            {"text": "B"}
        ]))
        .unwrap();
        assert_eq!(component.to_legacy(), "§c§oA§rB");
    }

    #[test]
    fn test_color_change_reapplies_decorations() {
        let component = TextComponent::from_json(&json!([
            {"text": "A", "color": "red", "bold": true},
            {"text": "B", "color": "blue"}
        ]))
        .unwrap();
        // "B" inherits bold from its parent, so it must be re-emitted after §9.
        assert_eq!(component.to_legacy(), "§c§lA§9§lB");
    }

    #[test]
    fn test_hex_color_downsamples() {
        assert_eq!(NamedColor::parse("#FF5556"), Some(NamedColor::Red));
        assert_eq!(NamedColor::parse("#000001"), Some(NamedColor::Black));
        assert_eq!(NamedColor::parse("#12345"), None);
        assert_eq!(NamedColor::parse("dark_aqua"), Some(NamedColor::DarkAqua));
    }

    #[test]
    fn test_hex_color_rejects_signs_and_non_hex() {
        assert_eq!(NamedColor::parse("#+12345"), None);
        assert_eq!(NamedColor::parse("#-12345"), None);
        assert_eq!(NamedColor::parse("#12345g"), None);
        assert_eq!(NamedColor::parse("#1234567"), None);
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(NamedColor::Black.code(), '0');
        assert_eq!(NamedColor::Gray.code(), '7');
        assert_eq!(NamedColor::Green.code(), 'a');
        assert_eq!(NamedColor::White.code(), 'f');
    }

    #[test]
    fn test_translate_uses_fallback() {
        let component =
            TextComponent::from_json(&json!({"translate": "pack.desc", "fallback": "Desc"})).unwrap();
        assert_eq!(component.to_plain(), "Desc");
        let bare = TextComponent::from_json(&json!({"translate": "pack.desc"})).unwrap();
        assert_eq!(bare.to_plain(), "pack.desc");
    }

    #[test]
    fn test_null_is_rejected() {
        assert!(TextComponent::from_json(&Value::Null).is_err());
    }

    #[test]
    fn test_legacy_to_plain() {
        assert_eq!(legacy_to_plain("§aGreen §lBold§r done"), "Green Bold done");
        assert_eq!(legacy_to_plain("trailing §"), "trailing ");
    }
}
