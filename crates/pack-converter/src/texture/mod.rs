//! Texture conversion: mappings, transformers and the converter that ties
//! them together.

mod converter;
pub mod mappings;
pub mod transformer;

pub use converter::TextureConverter;
pub use mappings::TextureMappings;
pub use transformer::{default_transformers, TextureTransformer, TransformContext};
