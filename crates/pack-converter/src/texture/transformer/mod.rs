//! Texture transformers.
//!
//! A transformer gets a [`TransformContext`] holding the working set of Java
//! textures. It may consume textures (`poll`), add new ones (`offer`) or
//! write arbitrary files straight into the Bedrock pack. Whatever remains in
//! the working set afterwards is copied over through the texture mappings.

mod context;
pub mod entity;
pub mod ui;

pub use context::TransformContext;

use image::RgbaImage;

use crate::error::Result;
use crate::pack::Texture;
use crate::util::image as image_util;

/// A single texture transformation step.
pub trait TextureTransformer: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn transform(&self, context: &mut TransformContext<'_>) -> Result<()>;

    /// Decode a texture into an RGBA image.
    fn read_image(&self, texture: &Texture) -> Result<RgbaImage> {
        image_util::decode(texture.data())
    }
}

/// Every built-in transformer, in the order they run.
pub fn default_transformers() -> Vec<Box<dyn TextureTransformer>> {
    vec![
        Box::new(entity::DolphinTransformer),
        Box::new(ui::LocatorTransformer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transformer_order() {
        let names: Vec<&str> = default_transformers().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["dolphin", "locator"]);
    }
}
