//! Dolphin model for retextured dolphins.

use crate::error::Result;
use crate::key::Key;
use crate::resources::{self, DOLPHIN_GEOMETRY_NAME};
use crate::texture::transformer::{TextureTransformer, TransformContext};

const DOLPHIN_TEXTURE: &str = "entity/dolphin.png";
const DOLPHIN_GEOMETRY_PATH: &str = "models/entity/dolphin.geo.json";

/// Ships a dolphin geometry matching the Java model whenever the pack
/// retextures the dolphin, since Bedrock's UV layout differs.
pub struct DolphinTransformer;

impl TextureTransformer for DolphinTransformer {
    fn name(&self) -> &'static str {
        "dolphin"
    }

    fn transform(&self, context: &mut TransformContext<'_>) -> Result<()> {
        if !context.is_texture_present(&Key::minecraft(DOLPHIN_TEXTURE)?) {
            return Ok(());
        }

        let Some(geometry) = resources::resource(DOLPHIN_GEOMETRY_NAME) else {
            context.error("Dolphin geo file not found.");
            return Ok(());
        };

        context
            .bedrock_resource_pack()
            .add_extra_file(geometry.to_vec(), DOLPHIN_GEOMETRY_PATH)?;
        context.debug("Added dolphin geometry");
        Ok(())
    }
}
