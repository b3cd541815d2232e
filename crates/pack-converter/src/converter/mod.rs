//! Pack-level conversion.
//!
//! A [`PackConverter`] reads a Java pack, hands it to each [`Converter`]
//! stage in turn and exports whatever Bedrock pack they built.

mod manifest;
mod pack_converter;

pub use manifest::ManifestConverter;
pub use pack_converter::{PackConverter, PackConverterBuilder};

use serde::Serialize;

use crate::data::{BaseConversionData, TransformedTexture};
use crate::error::Result;
use crate::pack::{BedrockResourcePack, JavaResourcePack};

/// One stage of a pack conversion.
pub trait Converter: Send + Sync {
    fn name(&self) -> &'static str;

    fn convert(
        &self,
        java: &JavaResourcePack,
        bedrock: &mut BedrockResourcePack,
        base: &BaseConversionData,
        report: &mut ConversionReport,
    ) -> Result<()>;
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub pack_name: String,
    pub textures_converted: usize,
    pub extra_files: usize,
    pub warnings: usize,
    pub errors: usize,
    pub transformed_textures: Vec<TransformedTexture>,
}

impl ConversionReport {
    pub fn new(pack_name: impl Into<String>) -> Self {
        Self {
            pack_name: pack_name.into(),
            ..Default::default()
        }
    }
}
