//! In-memory models of Java and Bedrock resource packs.
//!
//! [`JavaResourcePack`] is what the converters read from, and
//! [`BedrockResourcePack`] is what they fill in and finally export.

mod bedrock;
mod java;
mod manifest;

pub use bedrock::BedrockResourcePack;
pub use java::JavaResourcePack;
pub use manifest::{BedrockManifest, ManifestHeader, ManifestModule, PackMeta, PackSection};

use crate::key::Key;

/// An encoded texture (PNG or TGA bytes) and the key it lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    key: Key,
    data: Vec<u8>,
}

impl Texture {
    pub fn new(key: Key, data: Vec<u8>) -> Self {
        Self { key, data }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
