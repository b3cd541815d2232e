//! Working state handed to each texture transformer.
//!
//! Textures a transformer polls are removed from the working set, so they are
//! not copied again by the generic mapping pass that runs afterwards.

use std::collections::BTreeMap;
use std::fmt::Display;

use image::{ImageFormat, RgbaImage};

use crate::context::PackConversionContext;
use crate::data::{ConversionData, TextureConversionData};
use crate::error::Result;
use crate::key::Key;
use crate::pack::{BedrockResourcePack, JavaResourcePack, Texture};
use crate::texture::mappings::TextureMappings;
use crate::util::image as image_util;

/// Everything a [`TextureTransformer`](super::TextureTransformer) may look at
/// or change.
pub struct TransformContext<'a> {
    conversion: &'a mut PackConversionContext<TextureConversionData>,
    mappings: &'a TextureMappings,
    textures: &'a mut BTreeMap<Key, Texture>,
    bedrock_pack: &'a mut BedrockResourcePack,
    java_pack: &'a JavaResourcePack,
}

impl<'a> TransformContext<'a> {
    pub fn new(
        conversion: &'a mut PackConversionContext<TextureConversionData>,
        mappings: &'a TextureMappings,
        textures: &'a mut BTreeMap<Key, Texture>,
        bedrock_pack: &'a mut BedrockResourcePack,
        java_pack: &'a JavaResourcePack,
    ) -> Self {
        Self {
            conversion,
            mappings,
            textures,
            bedrock_pack,
            java_pack,
        }
    }

    pub fn mappings(&self) -> &TextureMappings {
        self.mappings
    }

    pub fn bedrock_resource_pack(&mut self) -> &mut BedrockResourcePack {
        &mut *self.bedrock_pack
    }

    pub fn java_resource_pack(&self) -> &JavaResourcePack {
        self.java_pack
    }

    pub fn vanilla_pack(&self) -> &JavaResourcePack {
        self.conversion.data().vanilla_pack()
    }

    /// Remove a texture from the working set and return it.
    pub fn poll(&mut self, key: &Key) -> Option<Texture> {
        self.textures.remove(key)
    }

    /// Look at a texture without removing it.
    pub fn peek(&self, key: &Key) -> Option<&Texture> {
        self.textures.get(key)
    }

    /// Remove a texture from the working set, or fall back to a copy of the
    /// vanilla one when the pack does not override it.
    pub fn poll_or_peek_vanilla(&mut self, key: &Key) -> Option<Texture> {
        match self.textures.remove(key) {
            Some(texture) => Some(texture),
            None => self.vanilla_pack().texture(key).cloned(),
        }
    }

    /// Look at a texture, falling back to the vanilla one.
    pub fn peek_or_vanilla(&self, key: &Key) -> Option<&Texture> {
        self.textures
            .get(key)
            .or_else(|| self.vanilla_pack().texture(key))
    }

    /// Whether the pack itself (not vanilla) still holds this texture.
    pub fn is_texture_present(&self, key: &Key) -> bool {
        self.textures.contains_key(key)
    }

    /// Add a texture to the working set, replacing any with the same key.
    pub fn offer(&mut self, texture: Texture) {
        self.textures.insert(texture.key().clone(), texture);
    }

    /// Encode an image and add it to the working set.
    pub fn offer_image(&mut self, key: Key, image: &RgbaImage, format: ImageFormat) -> Result<()> {
        let bytes = image_util::encode(image, format)?;
        self.offer(Texture::new(key, bytes));
        Ok(())
    }

    pub fn debug(&self, message: &str) {
        self.conversion.debug(message);
    }

    pub fn info(&self, message: &str) {
        self.conversion.info(message);
    }

    pub fn warn(&mut self, message: &str) {
        self.conversion.warn(message);
    }

    pub fn error(&mut self, message: &str) {
        self.conversion.error(message);
    }

    pub fn error_with(&mut self, message: &str, err: &dyn Display) {
        self.conversion.error_with(message, err);
    }
}
