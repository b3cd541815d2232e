//! Top-level conversion entry point.
//!
//! `PackConverter` reads the Java pack, runs the manifest and texture
//! stages, and writes the Bedrock pack as a directory or `.mcpack`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::{ConversionReport, Converter, ManifestConverter};
use crate::config::BedrockPackConfig;
use crate::data::BaseConversionData;
use crate::error::{ConverterError, Result};
use crate::pack::{BedrockResourcePack, JavaResourcePack};
use crate::texture::{default_transformers, TextureConverter, TextureMappings, TextureTransformer};

/// Converts one Java pack into a Bedrock pack.
///
/// # Example
///
/// ```rust,ignore
/// use pack_converter::PackConverter;
///
/// let report = PackConverter::builder()
///     .input("Faithful.zip")
///     .output("Faithful.mcpack")
///     .build()?
///     .convert()?;
/// println!("Converted {} textures", report.textures_converted);
/// ```
pub struct PackConverter {
    input: PathBuf,
    output: PathBuf,
    pack_name: String,
    zip_output: bool,
    vanilla_pack: Arc<JavaResourcePack>,
    converters: Vec<Box<dyn Converter>>,
}

impl PackConverter {
    pub fn builder() -> PackConverterBuilder {
        PackConverterBuilder::default()
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    /// Read the input pack, convert it and export the result.
    pub fn convert(&self) -> Result<ConversionReport> {
        let java = JavaResourcePack::read(&self.input)?;
        let (bedrock, report) = self.convert_pack(&java)?;

        if self.zip_output {
            bedrock.export_zip(&self.output)?;
        } else {
            bedrock.export(&self.output)?;
        }

        info!(
            "Converted {} ({} textures, {} warnings, {} errors)",
            report.pack_name, report.textures_converted, report.warnings, report.errors
        );
        Ok(report)
    }

    /// Convert an already loaded pack without touching the filesystem.
    pub fn convert_pack(
        &self,
        java: &JavaResourcePack,
    ) -> Result<(BedrockResourcePack, ConversionReport)> {
        let base = BaseConversionData::new(&self.input, &self.output, self.vanilla_pack.clone());
        let mut bedrock = BedrockResourcePack::new();
        let mut report = ConversionReport::new(self.pack_name.clone());

        for converter in &self.converters {
            info!("Running {} converter", converter.name());
            converter.convert(java, &mut bedrock, &base, &mut report)?;
        }

        report.extra_files = bedrock.extra_files().count();
        Ok((bedrock, report))
    }
}

/// Builder for [`PackConverter`].
#[derive(Default)]
pub struct PackConverterBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    vanilla_pack: Option<Arc<JavaResourcePack>>,
    vanilla_pack_path: Option<PathBuf>,
    texture_subdirectory: Option<String>,
    pack_name: Option<String>,
    transformers: Option<Vec<Box<dyn TextureTransformer>>>,
    mappings: Option<TextureMappings>,
    zip_output: bool,
}

impl PackConverterBuilder {
    /// Java pack directory or `.zip` archive to convert.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Destination directory, or `.mcpack`/`.zip` file.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Vanilla reference pack shared between conversions.
    pub fn vanilla_pack(mut self, pack: Arc<JavaResourcePack>) -> Self {
        self.vanilla_pack = Some(pack);
        self
    }

    /// Load the vanilla reference pack from disk at build time.
    ///
    /// Ignored when [`vanilla_pack`](Self::vanilla_pack) is also set.
    pub fn vanilla_pack_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vanilla_pack_path = Some(path.into());
        self
    }

    /// Place all textures under `textures/<subdirectory>/`.
    pub fn texture_subdirectory(mut self, subdirectory: impl Into<String>) -> Self {
        self.texture_subdirectory = Some(subdirectory.into());
        self
    }

    /// Override the pack name (defaults to the input file stem).
    pub fn pack_name(mut self, name: impl Into<String>) -> Self {
        self.pack_name = Some(name.into());
        self
    }

    /// Replace the built-in texture transformers.
    pub fn transformers(mut self, transformers: Vec<Box<dyn TextureTransformer>>) -> Self {
        self.transformers = Some(transformers);
        self
    }

    /// Replace the built-in texture mappings.
    pub fn mappings(mut self, mappings: TextureMappings) -> Self {
        self.mappings = Some(mappings);
        self
    }

    /// Export as a zip archive regardless of the output extension.
    pub fn zip_output(mut self, enable: bool) -> Self {
        self.zip_output = enable;
        self
    }

    pub fn build(self) -> Result<PackConverter> {
        let input = self.input.ok_or_else(|| ConverterError::Config {
            message: "no input pack given".to_string(),
        })?;
        let output = self.output.ok_or_else(|| ConverterError::Config {
            message: "no output path given".to_string(),
        })?;

        let vanilla_pack = match (self.vanilla_pack, self.vanilla_pack_path) {
            (Some(pack), _) => pack,
            (None, Some(path)) => Arc::new(JavaResourcePack::read(&path)?),
            (None, None) => Arc::new(JavaResourcePack::new()),
        };

        let pack_name = match self.pack_name {
            Some(name) => name,
            None => default_pack_name(&input)?,
        };

        let mappings = match self.mappings {
            Some(mappings) => mappings,
            None => TextureMappings::default_mappings()?,
        };
        let transformers = self.transformers.unwrap_or_else(default_transformers);

        let zip_output = self.zip_output || is_archive_path(&output);

        let converters: Vec<Box<dyn Converter>> = vec![
            Box::new(ManifestConverter),
            Box::new(TextureConverter::new(
                mappings,
                transformers,
                self.texture_subdirectory,
            )),
        ];

        Ok(PackConverter {
            input,
            output,
            pack_name,
            zip_output,
            vanilla_pack,
            converters,
        })
    }
}

fn default_pack_name(input: &Path) -> Result<String> {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ConverterError::Config {
            message: format!("cannot derive a pack name from {}", input.display()),
        })
}

fn is_archive_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            BedrockPackConfig::ARCHIVE_EXTENSIONS
                .iter()
                .any(|x| x.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::pack::Texture;

    #[test]
    fn test_build_requires_input_and_output() {
        let missing_input = PackConverter::builder().output("out").build();
        assert!(matches!(missing_input, Err(ConverterError::Config { .. })));

        let missing_output = PackConverter::builder().input("in").build();
        assert!(matches!(missing_output, Err(ConverterError::Config { .. })));
    }

    #[test]
    fn test_pack_name_defaults_to_file_stem() {
        let converter = PackConverter::builder()
            .input("/packs/Faithful 32x.zip")
            .output("/out")
            .build()
            .unwrap();
        assert_eq!(converter.pack_name(), "Faithful 32x");

        let named = PackConverter::builder()
            .input("/packs/x.zip")
            .output("/out")
            .pack_name("Custom")
            .build()
            .unwrap();
        assert_eq!(named.pack_name(), "Custom");
    }

    #[test]
    fn test_archive_output_detection() {
        assert!(is_archive_path(Path::new("out/pack.mcpack")));
        assert!(is_archive_path(Path::new("out/pack.ZIP")));
        assert!(!is_archive_path(Path::new("out/pack")));
    }

    #[test]
    fn test_convert_pack_in_memory() {
        let mut java = JavaResourcePack::new();
        let dolphin = Key::minecraft("entity/dolphin.png").unwrap();
        java.add_texture(Texture::new(dolphin, b"dolphin".to_vec()));

        let converter = PackConverter::builder()
            .input("Ocean")
            .output("out")
            .build()
            .unwrap();
        let (bedrock, report) = converter.convert_pack(&java).unwrap();

        assert_eq!(bedrock.manifest().unwrap().header.name, "Ocean");
        assert!(bedrock.texture("textures/entity/dolphin.png").is_some());
        assert!(bedrock.extra_file("models/entity/dolphin.geo.json").is_some());
        assert_eq!(report.textures_converted, 1);
        assert_eq!(report.extra_files, 1);
    }

    #[test]
    fn test_missing_vanilla_path_fails_build() {
        let result = PackConverter::builder()
            .input("in")
            .output("out")
            .vanilla_pack_path("/nonexistent/vanilla.zip")
            .build();
        assert!(matches!(result, Err(ConverterError::FileNotFound(_))));
    }
}
