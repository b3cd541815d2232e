//! Java to Bedrock texture path mappings.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::JavaPackConfig;
use crate::error::{ConverterError, Result};
use crate::key::Key;
use crate::resources::{self, TEXTURE_MAPPINGS_NAME};
use crate::util::fs::read_json;

/// Directory renames applied when a texture has no explicit mapping.
const DIRECTORY_RENAMES: &[(&str, &str)] = &[("block/", "blocks/"), ("item/", "items/")];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MappingTarget {
    One(String),
    Many(Vec<String>),
}

impl MappingTarget {
    fn into_paths(self) -> Vec<String> {
        match self {
            MappingTarget::One(path) => vec![path],
            MappingTarget::Many(paths) => paths,
        }
    }
}

/// Maps Java texture paths (relative to `textures/`, no extension) to one
/// or more Bedrock texture paths.
#[derive(Debug, Clone, Default)]
pub struct TextureMappings {
    mappings: HashMap<String, Vec<String>>,
}

impl TextureMappings {
    /// The mapping table bundled with the library.
    pub fn default_mappings() -> Result<Self> {
        let bytes = resources::resource(TEXTURE_MAPPINGS_NAME)
            .ok_or_else(|| ConverterError::MissingResource(TEXTURE_MAPPINGS_NAME.to_string()))?;
        let raw: HashMap<String, MappingTarget> = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, MappingTarget> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Load mappings from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: HashMap<String, MappingTarget> =
            read_json(path)?.ok_or_else(|| ConverterError::FileNotFound(path.to_path_buf()))?;
        debug!("Loaded {} texture mappings from {}", raw.len(), path.display());
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: HashMap<String, MappingTarget>) -> Self {
        let mappings = raw
            .into_iter()
            .map(|(java, target)| (java, target.into_paths()))
            .collect();
        Self { mappings }
    }

    /// Layer `other` on top; its entries win.
    pub fn merge(&mut self, other: TextureMappings) {
        self.mappings.extend(other.mappings);
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// The explicit mapping for a Java path, if one exists.
    pub fn get(&self, java_path: &str) -> Option<&[String]> {
        self.mappings.get(java_path).map(Vec::as_slice)
    }

    /// Bedrock paths for a Java path in the `minecraft` namespace.
    pub fn resolve(&self, java_path: &str) -> Vec<String> {
        if let Some(paths) = self.get(java_path) {
            return paths.to_vec();
        }

        for (from, to) in DIRECTORY_RENAMES {
            if let Some(rest) = java_path.strip_prefix(from) {
                return vec![format!("{to}{rest}")];
            }
        }
        vec![java_path.to_string()]
    }

    /// Bedrock paths for a texture key, without extension.
    ///
    /// Bedrock has no namespaces, so textures outside `minecraft` keep
    /// their namespace as a leading directory instead of being remapped.
    pub fn resolve_key(&self, key: &Key) -> Vec<String> {
        let path = key.value_without_extension();
        if key.namespace() == JavaPackConfig::DEFAULT_NAMESPACE {
            self.resolve(path)
        } else {
            vec![format!("{}/{}", key.namespace(), path)]
        }
    }
}
