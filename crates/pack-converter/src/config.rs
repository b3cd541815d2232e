//! Centralized configuration for the pack converter.
//!
//! Pack layout names, manifest constants and the vanilla sprite sizes the
//! texture transformers scale against.

/// Layout of a Java Edition resource pack.
pub struct JavaPackConfig;

impl JavaPackConfig {
    pub const ASSETS_DIR_NAME: &'static str = "assets";
    pub const TEXTURES_DIR_NAME: &'static str = "textures";
    pub const PACK_META_FILENAME: &'static str = "pack.mcmeta";
    pub const PACK_ICON_FILENAME: &'static str = "pack.png";
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";
    pub const TEXTURE_EXTENSIONS: &'static [&'static str] = &["png", "tga"];
    pub const ARCHIVE_EXTENSIONS: &'static [&'static str] = &["zip", "jar"];
    /// Largest archive entry that will be read into memory (256 MiB).
    pub const MAX_ENTRY_SIZE: u64 = 256 * 1024 * 1024;
}

/// Layout and manifest constants of a Bedrock Edition resource pack.
pub struct BedrockPackConfig;

impl BedrockPackConfig {
    pub const MANIFEST_FILENAME: &'static str = "manifest.json";
    pub const MANIFEST_FORMAT_VERSION: u32 = 2;
    pub const PACK_VERSION: [u32; 3] = [1, 0, 0];
    pub const MIN_ENGINE_VERSION: [u32; 3] = [1, 20, 0];
    pub const MODULE_TYPE: &'static str = "resources";
    pub const PACK_ICON_FILENAME: &'static str = "pack_icon.png";
    pub const TEXTURES_DIR_NAME: &'static str = "textures";
    pub const ARCHIVE_EXTENSIONS: &'static [&'static str] = &["mcpack", "zip"];
}

/// Vanilla sprite dimensions used to derive a pack's texture scale.
pub struct TextureConfig;

impl TextureConfig {
    /// Java locator bar dot sprites are 9x9 at 1x scale.
    pub const JAVA_LOCATOR_DOT_SIZE: u32 = 9;
    /// Bedrock locator dots are 7x7 at 1x scale.
    pub const BEDROCK_LOCATOR_DOT_SIZE: u32 = 7;
    /// Locator arrows are 7 pixels wide at 1x scale.
    pub const LOCATOR_ARROW_WIDTH: u32 = 7;
    /// Bedrock arrows keep only the top 4 rows.
    pub const LOCATOR_ARROW_HEIGHT: u32 = 4;
    /// Java locator background sprite is 12 pixels wide at 1x scale.
    pub const JAVA_LOCATOR_BG_WIDTH: u32 = 12;
    /// Bedrock locator background spans the full 182 pixel hotbar.
    pub const BEDROCK_LOCATOR_BG_WIDTH: u32 = 182;
    /// End caps of the background sprite.
    pub const LOCATOR_BG_CAP_WIDTH: u32 = 5;
    /// Repeating middle slice of the background sprite.
    pub const LOCATOR_BG_SLICE_WIDTH: u32 = 2;
    /// Upper bound on the pixel count of a generated locator sprite.
    pub const MAX_LOCATOR_OUTPUT_PIXELS: u64 = 4096 * 4096;
}
