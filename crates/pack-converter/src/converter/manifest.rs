//! Manifest stage: `pack.mcmeta` and `pack.png` to `manifest.json` and
//! `pack_icon.png`.

use crate::config::BedrockPackConfig;
use crate::context::PackConversionContext;
use crate::converter::{ConversionReport, Converter};
use crate::data::BaseConversionData;
use crate::error::Result;
use crate::pack::{BedrockManifest, BedrockResourcePack, JavaResourcePack};

/// Builds `manifest.json` from `pack.mcmeta` and carries the pack icon over.
pub struct ManifestConverter;

impl Converter for ManifestConverter {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn convert(
        &self,
        java: &JavaResourcePack,
        bedrock: &mut BedrockResourcePack,
        base: &BaseConversionData,
        report: &mut ConversionReport,
    ) -> Result<()> {
        let mut context = PackConversionContext::new(report.pack_name.clone(), base.clone());

        let description = match java.metadata() {
            Some(meta) => match meta.description() {
                Ok(component) => component.to_legacy(),
                Err(err) => {
                    context.warn(&format!("Unreadable pack description, leaving it empty: {err}"));
                    String::new()
                }
            },
            None => {
                context.warn("Pack has no pack.mcmeta");
                String::new()
            }
        };

        bedrock.set_manifest(BedrockManifest::new(report.pack_name.clone(), description));

        if let Some(icon) = java.icon() {
            bedrock.set_icon(icon.to_vec());
            context.debug(&format!("Copied pack icon to {}", BedrockPackConfig::PACK_ICON_FILENAME));
        }

        report.warnings += context.warnings();
        report.errors += context.errors();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PackMeta;
    use std::sync::Arc;

    fn base() -> BaseConversionData {
        BaseConversionData::new("in", "out", Arc::new(JavaResourcePack::new()))
    }

    #[test]
    fn test_builds_manifest_from_meta() {
        let mut java = JavaResourcePack::new();
        java.set_metadata(
            serde_json::from_str::<PackMeta>(
                r#"{"pack": {"pack_format": 34, "description": [{"text": "Crisp", "color": "aqua"}, " textures"]}}"#,
            )
            .unwrap(),
        );
        java.set_icon(b"icon".to_vec());

        let mut bedrock = BedrockResourcePack::new();
        let mut report = ConversionReport::new("Crisp");
        ManifestConverter
            .convert(&java, &mut bedrock, &base(), &mut report)
            .unwrap();

        let manifest = bedrock.manifest().unwrap();
        assert_eq!(manifest.header.name, "Crisp");
        assert_eq!(manifest.header.description, "§bCrisp textures");
        assert_eq!(bedrock.icon(), Some(&b"icon"[..]));
        assert_eq!(report.warnings, 0);
    }

    #[test]
    fn test_missing_meta_warns() {
        let mut bedrock = BedrockResourcePack::new();
        let mut report = ConversionReport::new("Bare");
        ManifestConverter
            .convert(&JavaResourcePack::new(), &mut bedrock, &base(), &mut report)
            .unwrap();

        assert_eq!(bedrock.manifest().unwrap().header.description, "");
        assert_eq!(report.warnings, 1);
    }
}
