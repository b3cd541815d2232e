//! Texture stage of the conversion pipeline.

use std::collections::BTreeMap;

use crate::context::PackConversionContext;
use crate::converter::{ConversionReport, Converter};
use crate::data::{BaseConversionData, TextureConversionData, TransformedTexture};
use crate::error::Result;
use crate::key::Key;
use crate::pack::{BedrockResourcePack, JavaResourcePack, Texture};
use crate::texture::mappings::TextureMappings;
use crate::texture::transformer::{TextureTransformer, TransformContext};

const DEFAULT_EXTENSION: &str = "png";

/// Runs the texture transformers, then copies every remaining texture into
/// the Bedrock pack at its mapped location.
pub struct TextureConverter {
    mappings: TextureMappings,
    transformers: Vec<Box<dyn TextureTransformer>>,
    texture_subdirectory: Option<String>,
}

impl TextureConverter {
    pub fn new(
        mappings: TextureMappings,
        transformers: Vec<Box<dyn TextureTransformer>>,
        texture_subdirectory: Option<String>,
    ) -> Self {
        Self {
            mappings,
            transformers,
            texture_subdirectory,
        }
    }

    fn run_transformers(
        &self,
        context: &mut PackConversionContext<TextureConversionData>,
        textures: &mut BTreeMap<Key, Texture>,
        java: &JavaResourcePack,
        bedrock: &mut BedrockResourcePack,
    ) -> Result<()> {
        for transformer in &self.transformers {
            let mut ctx = TransformContext::new(context, &self.mappings, textures, bedrock, java);
            ctx.debug(&format!("Running {} transformer", transformer.name()));

            if let Err(err) = transformer.transform(&mut ctx) {
                if !err.is_recoverable() {
                    return Err(err);
                }
                ctx.error_with(
                    &format!("Transformer {} failed", transformer.name()),
                    &err,
                );
            }
        }
        Ok(())
    }

    fn texture_root(&self) -> String {
        match self.texture_subdirectory.as_deref().map(|s| s.trim_matches('/')) {
            Some(sub) if !sub.is_empty() => format!("textures/{sub}/"),
            _ => "textures/".to_string(),
        }
    }
}

impl Converter for TextureConverter {
    fn name(&self) -> &'static str {
        "texture"
    }

    fn convert(
        &self,
        java: &JavaResourcePack,
        bedrock: &mut BedrockResourcePack,
        base: &BaseConversionData,
        report: &mut ConversionReport,
    ) -> Result<()> {
        let data = TextureConversionData::new(base.clone(), self.texture_subdirectory.clone());
        let mut context = PackConversionContext::new(report.pack_name.clone(), data);

        let mut textures: BTreeMap<Key, Texture> = java
            .textures()
            .map(|t| (t.key().clone(), t.clone()))
            .collect();
        context.info(&format!("Converting {} textures", textures.len()));

        self.run_transformers(&mut context, &mut textures, java, bedrock)?;

        let root = self.texture_root();
        for (key, texture) in textures {
            let extension = key.extension().unwrap_or(DEFAULT_EXTENSION);
            let mut output_paths = Vec::new();

            for path in self.mappings.resolve_key(&key) {
                let path = format!("{root}{path}.{extension}");
                match bedrock.add_texture(&path, texture.data().to_vec()) {
                    Ok(()) => output_paths.push(path),
                    Err(err) => context.error_with(&format!("Skipping texture {key}"), &err),
                }
            }

            if output_paths.is_empty() {
                continue;
            }
            context.debug(&format!("{key} -> {}", output_paths.join(", ")));
            context
                .data_mut()
                .add_transformed_texture(TransformedTexture { key, output_paths });
        }

        report.warnings += context.warnings();
        report.errors += context.errors();
        let transformed = context.into_data().into_transformed_textures();
        report.textures_converted += transformed.len();
        report.transformed_textures.extend(transformed);
        Ok(())
    }
}
