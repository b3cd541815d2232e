//! Pack Converter - converts Java Edition resource packs into Bedrock
//! Edition resource packs.
//!
//! The Java pack is read into memory, passed through a series of
//! converters (manifest, textures) and written out as a Bedrock pack
//! directory or `.mcpack` archive. Texture conversion runs a chain of
//! [`TextureTransformer`]s for sprites whose layout differs between the
//! two editions, then copies the rest through [`TextureMappings`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pack_converter::PackConverter;
//!
//! fn main() -> pack_converter::Result<()> {
//!     let report = PackConverter::builder()
//!         .input("packs/Faithful.zip")
//!         .output("out/Faithful.mcpack")
//!         .vanilla_pack_path("packs/vanilla.jar")
//!         .build()?
//!         .convert()?;
//!
//!     println!("Converted {} textures", report.textures_converted);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod converter;
pub mod data;
pub mod error;
pub mod key;
pub mod pack;
pub mod resources;
pub mod text;
pub mod texture;
pub mod util;

// Re-export commonly used types
pub use context::PackConversionContext;
pub use converter::{ConversionReport, Converter, ManifestConverter, PackConverter, PackConverterBuilder};
pub use data::{BaseConversionData, ConversionData, TextureConversionData, TransformedTexture};
pub use error::{ConverterError, Result};
pub use key::Key;
pub use pack::{BedrockManifest, BedrockResourcePack, JavaResourcePack, PackMeta, Texture};
pub use text::TextComponent;
pub use texture::{
    default_transformers, TextureConverter, TextureMappings, TextureTransformer, TransformContext,
};
