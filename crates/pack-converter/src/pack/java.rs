//! Java Edition resource pack model and loader.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use super::manifest::PackMeta;
use super::Texture;
use crate::config::JavaPackConfig;
use crate::error::{ConverterError, Result};
use crate::key::Key;

/// An in-memory Java resource pack: its textures, `pack.mcmeta` and icon.
#[derive(Debug, Clone, Default)]
pub struct JavaResourcePack {
    textures: BTreeMap<Key, Texture>,
    metadata: Option<PackMeta>,
    icon: Option<Vec<u8>>,
}

/// What a pack-relative path turned out to be.
enum Entry {
    Meta,
    Icon,
    Texture(Key),
    Ignored,
}

impl JavaResourcePack {
    /// An empty pack, e.g. when no vanilla reference is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a pack from a directory or a `.zip`/`.jar` archive.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConverterError::FileNotFound(path.to_path_buf()));
        }

        let pack = if path.is_dir() {
            Self::read_directory(path)?
        } else if has_extension(path, JavaPackConfig::ARCHIVE_EXTENSIONS) {
            Self::read_archive(path)?
        } else {
            return Err(ConverterError::InvalidPack {
                message: format!(
                    "{} is neither a directory nor a zip archive",
                    path.display()
                ),
            });
        };

        info!(
            "Read Java pack {} ({} textures)",
            path.display(),
            pack.textures.len()
        );
        Ok(pack)
    }

    fn read_directory(root: &Path) -> Result<Self> {
        let mut pack = Self::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let kind = classify(&relative);
            if matches!(kind, Entry::Ignored) {
                debug!("Ignoring {}", relative);
                continue;
            }

            let bytes =
                fs::read(entry.path()).map_err(|e| ConverterError::io_with_path(e, entry.path()))?;
            pack.ingest(kind, &relative, bytes)?;
        }

        Ok(pack)
    }

    fn read_archive(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ConverterError::io_with_path(e, path))?;
        let mut archive = ZipArchive::new(file).map_err(|e| ConverterError::Zip {
            message: format!("Failed to open {}: {}", path.display(), e),
            source: Some(e),
        })?;

        let names: Vec<String> = archive
            .file_names()
            .map(|name| name.replace('\\', "/"))
            .collect();
        let root = archive_root(&names);
        if !root.is_empty() {
            debug!("Pack root inside archive is {}", root);
        }

        let mut pack = Self::new();
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().replace('\\', "/");
            let Some(relative) = name.strip_prefix(root.as_str()) else {
                debug!("Ignoring {} outside pack root", name);
                continue;
            };

            let kind = classify(relative);
            if matches!(kind, Entry::Ignored) {
                debug!("Ignoring {}", relative);
                continue;
            }

            let limit = JavaPackConfig::MAX_ENTRY_SIZE;
            if file.size() > limit {
                return Err(oversized_entry(relative, file.size()));
            }
            let mut bytes = Vec::new();
            file.by_ref().take(limit + 1).read_to_end(&mut bytes)?;
            if bytes.len() as u64 > limit {
                return Err(oversized_entry(relative, bytes.len() as u64));
            }
            pack.ingest(kind, relative, bytes)?;
        }

        Ok(pack)
    }

    fn ingest(&mut self, kind: Entry, relative: &str, bytes: Vec<u8>) -> Result<()> {
        match kind {
            Entry::Meta => {
                let meta: PackMeta =
                    serde_json::from_slice(&bytes).map_err(|e| ConverterError::Json {
                        message: format!("Failed to parse {}: {}", relative, e),
                        source: Some(e),
                    })?;
                self.metadata = Some(meta);
            }
            Entry::Icon => self.icon = Some(bytes),
            Entry::Texture(key) => {
                self.add_texture(Texture::new(key, bytes));
            }
            Entry::Ignored => {}
        }
        Ok(())
    }

    pub fn texture(&self, key: &Key) -> Option<&Texture> {
        self.textures.get(key)
    }

    pub fn textures(&self) -> impl Iterator<Item = &Texture> {
        self.textures.values()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Add a texture, replacing any previous one under the same key.
    pub fn add_texture(&mut self, texture: Texture) -> Option<Texture> {
        self.textures.insert(texture.key().clone(), texture)
    }

    pub fn remove_texture(&mut self, key: &Key) -> Option<Texture> {
        self.textures.remove(key)
    }

    pub fn metadata(&self) -> Option<&PackMeta> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: PackMeta) {
        self.metadata = Some(metadata);
    }

    pub fn icon(&self) -> Option<&[u8]> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Vec<u8>) {
        self.icon = Some(icon);
    }
}

fn oversized_entry(relative: &str, size: u64) -> ConverterError {
    ConverterError::InvalidPack {
        message: format!(
            "{} is {} bytes, larger than the {} byte limit",
            relative,
            size,
            JavaPackConfig::MAX_ENTRY_SIZE
        ),
    }
}

fn classify(relative: &str) -> Entry {
    if relative == JavaPackConfig::PACK_META_FILENAME {
        return Entry::Meta;
    }
    if relative == JavaPackConfig::PACK_ICON_FILENAME {
        return Entry::Icon;
    }

    let mut parts = relative.splitn(4, '/');
    let (Some(assets), Some(namespace), Some(textures), Some(path)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Entry::Ignored;
    };
    if assets != JavaPackConfig::ASSETS_DIR_NAME || textures != JavaPackConfig::TEXTURES_DIR_NAME {
        return Entry::Ignored;
    }
    if !has_extension(Path::new(path), JavaPackConfig::TEXTURE_EXTENSIONS) {
        return Entry::Ignored;
    }

    match Key::new(namespace, path) {
        Ok(key) => Entry::Texture(key),
        Err(e) => {
            warn!("Skipping texture {}: {}", relative, e);
            Entry::Ignored
        }
    }
}

/// The directory prefix inside an archive that holds `pack.mcmeta`.
///
/// Packs zipped from their parent folder wrap everything in one extra
/// directory; the shallowest `pack.mcmeta` marks the real root.
fn archive_root(names: &[String]) -> String {
    let meta = JavaPackConfig::PACK_META_FILENAME;
    if names.iter().any(|n| n == meta) {
        return String::new();
    }
    names
        .iter()
        .filter_map(|n| n.strip_suffix(meta))
        .filter(|prefix| prefix.ends_with('/'))
        .min_by_key(|prefix| prefix.matches('/').count())
        .map(str::to_string)
        .unwrap_or_default()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
