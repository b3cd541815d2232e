//! Bedrock Edition resource pack model and exporter.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::manifest::BedrockManifest;
use crate::config::BedrockPackConfig;
use crate::error::{ConverterError, Result};
use crate::util::fs::{atomic_write, atomic_write_json};

/// An in-memory Bedrock resource pack.
///
/// Every path is relative to the pack root and uses forward slashes.
#[derive(Debug, Clone, Default)]
pub struct BedrockResourcePack {
    manifest: Option<BedrockManifest>,
    icon: Option<Vec<u8>>,
    textures: BTreeMap<String, Vec<u8>>,
    extra_files: BTreeMap<String, Vec<u8>>,
}

impl BedrockResourcePack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest(&self) -> Option<&BedrockManifest> {
        self.manifest.as_ref()
    }

    pub fn set_manifest(&mut self, manifest: BedrockManifest) {
        self.manifest = Some(manifest);
    }

    pub fn icon(&self) -> Option<&[u8]> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Vec<u8>) {
        self.icon = Some(icon);
    }

    /// Add a texture at a pack-relative path such as `textures/ui/locator_bg.png`.
    pub fn add_texture(&mut self, path: &str, bytes: Vec<u8>) -> Result<()> {
        let path = normalize_path(path)?;
        self.textures.insert(path, bytes);
        Ok(())
    }

    pub fn texture(&self, path: &str) -> Option<&[u8]> {
        self.textures.get(path).map(Vec::as_slice)
    }

    pub fn textures(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.textures.iter().map(|(p, b)| (p.as_str(), b.as_slice()))
    }

    /// Add any other file (models, animations, ...) at a pack-relative path.
    pub fn add_extra_file(&mut self, bytes: Vec<u8>, path: &str) -> Result<()> {
        let path = normalize_path(path)?;
        self.extra_files.insert(path, bytes);
        Ok(())
    }

    pub fn extra_file(&self, path: &str) -> Option<&[u8]> {
        self.extra_files.get(path).map(Vec::as_slice)
    }

    pub fn extra_files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.extra_files
            .iter()
            .map(|(p, b)| (p.as_str(), b.as_slice()))
    }

    /// Textures and extra files together, excluding manifest and icon.
    fn content_files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.textures().chain(self.extra_files())
    }

    /// Write the pack into `dir`, creating it if needed.
    pub fn export(&self, dir: &Path) -> Result<()> {
        if let Some(manifest) = &self.manifest {
            atomic_write_json(&dir.join(BedrockPackConfig::MANIFEST_FILENAME), manifest)?;
        }
        if let Some(icon) = &self.icon {
            atomic_write(&dir.join(BedrockPackConfig::PACK_ICON_FILENAME), icon)?;
        }
        for (path, bytes) in self.content_files() {
            atomic_write(&dir.join(path), bytes)?;
        }

        info!(
            "Exported Bedrock pack to {} ({} textures, {} extra files)",
            dir.display(),
            self.textures.len(),
            self.extra_files.len()
        );
        Ok(())
    }

    /// Write the pack as a zip archive (`.mcpack`).
    pub fn export_zip(&self, path: &Path) -> Result<()> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        if let Some(manifest) = &self.manifest {
            writer.start_file(BedrockPackConfig::MANIFEST_FILENAME, options)?;
            writer.write_all(&serde_json::to_vec_pretty(manifest)?)?;
        }
        if let Some(icon) = &self.icon {
            writer.start_file(BedrockPackConfig::PACK_ICON_FILENAME, options)?;
            writer.write_all(icon)?;
        }
        for (file, bytes) in self.content_files() {
            debug!("Zipping {}", file);
            writer.start_file(file, options)?;
            writer.write_all(bytes)?;
        }

        let archive = writer.finish()?.into_inner();
        atomic_write(path, &archive)?;

        info!("Exported Bedrock pack archive {}", path.display());
        Ok(())
    }
}

/// Normalise a pack-relative path to forward slashes, rejecting anything
/// that could escape the pack root.
fn normalize_path(path: &str) -> Result<String> {
    let normalized = path.replace('\\', "/");
    let normalized = normalized.trim_start_matches("./");

    let escapes = normalized.starts_with('/')
        || normalized.contains(':')
        || normalized.split('/').any(|part| part == "..");
    if normalized.is_empty() || escapes {
        return Err(ConverterError::InvalidPack {
            message: format!("invalid pack path {path:?}"),
        });
    }

    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn sample_pack() -> BedrockResourcePack {
        let mut pack = BedrockResourcePack::new();
        pack.set_manifest(BedrockManifest::new("Sample", "A sample"));
        pack.set_icon(b"icon".to_vec());
        pack.add_texture("textures/ui/locator_bg.png", b"bg".to_vec())
            .unwrap();
        pack.add_extra_file(b"{}".to_vec(), "models/entity/dolphin.geo.json")
            .unwrap();
        pack
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("textures\\blocks\\dirt.png").unwrap(), "textures/blocks/dirt.png");
        assert_eq!(normalize_path("./models/a.json").unwrap(), "models/a.json");
        assert!(normalize_path("../escape.png").is_err());
        assert!(normalize_path("textures/../../escape.png").is_err());
        assert!(normalize_path("/etc/passwd").is_err());
        assert!(normalize_path("C:/Windows").is_err());
        assert!(normalize_path("").is_err());
    }

    #[test]
    fn test_export_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");
        sample_pack().export(&out).unwrap();

        assert_eq!(fs::read(out.join("textures/ui/locator_bg.png")).unwrap(), b"bg");
        assert_eq!(fs::read(out.join("models/entity/dolphin.geo.json")).unwrap(), b"{}");
        assert_eq!(fs::read(out.join("pack_icon.png")).unwrap(), b"icon");

        let manifest: BedrockManifest =
            serde_json::from_slice(&fs::read(out.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(manifest.header.name, "Sample");
    }

    #[test]
    fn test_export_zip() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("sample.mcpack");
        sample_pack().export_zip(&out).unwrap();

        let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "manifest.json",
                "models/entity/dolphin.geo.json",
                "pack_icon.png",
                "textures/ui/locator_bg.png",
            ]
        );
        assert_eq!(archive.by_name("textures/ui/locator_bg.png").unwrap().size(), 2);
    }
}
