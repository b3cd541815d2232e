//! Data handed to a conversion: where the pack lives, where it goes and
//! what vanilla looks like.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::key::Key;
use crate::pack::JavaResourcePack;

/// Common accessors every kind of conversion data offers.
pub trait ConversionData {
    fn input_directory(&self) -> &Path;
    fn output_directory(&self) -> &Path;
    fn vanilla_pack(&self) -> &JavaResourcePack;
}

/// Input, output and vanilla reference pack of a conversion.
#[derive(Debug, Clone)]
pub struct BaseConversionData {
    input_directory: PathBuf,
    output_directory: PathBuf,
    vanilla_pack: Arc<JavaResourcePack>,
}

impl BaseConversionData {
    pub fn new(
        input_directory: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        vanilla_pack: Arc<JavaResourcePack>,
    ) -> Self {
        Self {
            input_directory: input_directory.into(),
            output_directory: output_directory.into(),
            vanilla_pack,
        }
    }
}

impl ConversionData for BaseConversionData {
    fn input_directory(&self) -> &Path {
        &self.input_directory
    }

    fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    fn vanilla_pack(&self) -> &JavaResourcePack {
        &self.vanilla_pack
    }
}

/// Where a Java texture ended up in the Bedrock pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedTexture {
    pub key: Key,
    pub output_paths: Vec<String>,
}

/// Conversion data for the texture stage.
#[derive(Debug, Clone)]
pub struct TextureConversionData {
    base: BaseConversionData,
    transformed_textures: Vec<TransformedTexture>,
    texture_subdirectory: Option<String>,
}

impl TextureConversionData {
    pub fn new(base: BaseConversionData, texture_subdirectory: Option<String>) -> Self {
        Self {
            base,
            transformed_textures: Vec::new(),
            texture_subdirectory,
        }
    }

    pub fn add_transformed_texture(&mut self, transformed_texture: TransformedTexture) {
        self.transformed_textures.push(transformed_texture);
    }

    pub fn transformed_textures(&self) -> &[TransformedTexture] {
        &self.transformed_textures
    }

    pub fn into_transformed_textures(self) -> Vec<TransformedTexture> {
        self.transformed_textures
    }

    pub fn texture_subdirectory(&self) -> Option<&str> {
        self.texture_subdirectory.as_deref()
    }
}

impl ConversionData for TextureConversionData {
    fn input_directory(&self) -> &Path {
        self.base.input_directory()
    }

    fn output_directory(&self) -> &Path {
        self.base.output_directory()
    }

    fn vanilla_pack(&self) -> &JavaResourcePack {
        self.base.vanilla_pack()
    }
}
