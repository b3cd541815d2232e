//! Namespaced resource keys (`namespace:value`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::JavaPackConfig;
use crate::error::{ConverterError, Result};

/// A namespaced identifier such as `minecraft:entity/dolphin.png`.
///
/// Texture keys carry the path relative to `assets/<namespace>/textures/`,
/// extension included.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    namespace: String,
    value: String,
}

impl Key {
    /// Create a key, validating both parts.
    pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let value = value.into();

        if namespace.is_empty() {
            return Err(invalid(&namespace, &value, "namespace is empty"));
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(invalid(
                &namespace,
                &value,
                &format!("character {c:?} is not allowed in a namespace"),
            ));
        }
        if value.is_empty() {
            return Err(invalid(&namespace, &value, "value is empty"));
        }
        if let Some(c) = value.chars().find(|c| !is_value_char(*c)) {
            return Err(invalid(
                &namespace,
                &value,
                &format!("character {c:?} is not allowed in a value"),
            ));
        }

        Ok(Self { namespace, value })
    }

    /// Create a key in the `minecraft` namespace.
    pub fn minecraft(value: impl Into<String>) -> Result<Self> {
        Self::new(JavaPackConfig::DEFAULT_NAMESPACE, value)
    }

    /// Parse `namespace:value`, defaulting to `minecraft` when no colon is present.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::minecraft(s),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value without its trailing file extension, if any.
    pub fn value_without_extension(&self) -> &str {
        match self.value.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
            _ => &self.value,
        }
    }

    /// The file extension of the value, if any.
    pub fn extension(&self) -> Option<&str> {
        match self.value.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => Some(ext),
            _ => None,
        }
    }
}

fn invalid(namespace: &str, value: &str, reason: &str) -> ConverterError {
    ConverterError::InvalidKey {
        key: format!("{namespace}:{value}"),
        reason: reason.to_string(),
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for Key {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Key::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_minecraft() {
        let key = Key::parse("entity/dolphin.png").unwrap();
        assert_eq!(key.namespace(), "minecraft");
        assert_eq!(key.value(), "entity/dolphin.png");
        assert_eq!(key.to_string(), "minecraft:entity/dolphin.png");
    }

    #[test]
    fn test_parse_with_namespace() {
        let key: Key = "mypack:gui/icons.png".parse().unwrap();
        assert_eq!(key.namespace(), "mypack");
        assert_eq!(key.value(), "gui/icons.png");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert!(Key::new("Minecraft", "stone").is_err());
        assert!(Key::new("minecraft", "block/Stone.png").is_err());
        assert!(Key::new("mine/craft", "stone").is_err());
        assert!(Key::new("", "stone").is_err());
        assert!(Key::new("minecraft", "").is_err());
    }

    #[test]
    fn test_extension_helpers() {
        let key = Key::minecraft("block/dirt.png").unwrap();
        assert_eq!(key.extension(), Some("png"));
        assert_eq!(key.value_without_extension(), "block/dirt");

        let bare = Key::minecraft("models.d/thing").unwrap();
        assert_eq!(bare.extension(), None);
        assert_eq!(bare.value_without_extension(), "models.d/thing");
    }

    #[test]
    fn test_serde_as_string() {
        let key = Key::minecraft("item/apple.png").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"minecraft:item/apple.png\"");
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
