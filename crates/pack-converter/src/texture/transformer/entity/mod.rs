//! Transformers for entity textures.

mod dolphin;

pub use dolphin::DolphinTransformer;
