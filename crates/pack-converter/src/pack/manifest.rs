//! Pack metadata on both sides: Java's `pack.mcmeta` and Bedrock's `manifest.json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::BedrockPackConfig;
use crate::error::Result;
use crate::text::TextComponent;

/// Contents of a Java `pack.mcmeta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackSection {
    #[serde(default)]
    pub pack_format: Option<u32>,
    /// A JSON text component.
    #[serde(default)]
    pub description: Value,
}

impl PackMeta {
    /// The pack description as a text component (empty when absent).
    pub fn description(&self) -> Result<TextComponent> {
        if self.pack.description.is_null() {
            return Ok(TextComponent::default());
        }
        TextComponent::from_json(&self.pack.description)
    }
}

/// A Bedrock `manifest.json` for a resource pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedrockManifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: [u32; 3],
    pub description: String,
}

impl BedrockManifest {
    /// A fresh resource pack manifest with random header and module UUIDs.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            format_version: BedrockPackConfig::MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name: name.into(),
                description: description.clone(),
                uuid: Uuid::new_v4().to_string(),
                version: BedrockPackConfig::PACK_VERSION,
                min_engine_version: BedrockPackConfig::MIN_ENGINE_VERSION,
            },
            modules: vec![ManifestModule {
                module_type: BedrockPackConfig::MODULE_TYPE.to_string(),
                uuid: Uuid::new_v4().to_string(),
                version: BedrockPackConfig::PACK_VERSION,
                description,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_shape() {
        let manifest = BedrockManifest::new("Test Pack", "§aGreen");
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["format_version"], 2);
        assert_eq!(json["header"]["name"], "Test Pack");
        assert_eq!(json["header"]["version"], serde_json::json!([1, 0, 0]));
        assert_eq!(json["modules"][0]["type"], "resources");
        assert_ne!(manifest.header.uuid, manifest.modules[0].uuid);
        assert!(Uuid::parse_str(&manifest.header.uuid).is_ok());
    }

    #[test]
    fn test_pack_meta_description() {
        let meta: PackMeta = serde_json::from_str(
            r#"{"pack": {"pack_format": 34, "description": {"text": "Hi", "color": "green"}}}"#,
        )
        .unwrap();
        assert_eq!(meta.pack.pack_format, Some(34));
        assert_eq!(meta.description().unwrap().to_legacy(), "§aHi");
    }

    #[test]
    fn test_pack_meta_without_description() {
        let meta: PackMeta = serde_json::from_str(r#"{"pack": {"pack_format": 15}}"#).unwrap();
        assert_eq!(meta.description().unwrap().to_plain(), "");
    }
}
