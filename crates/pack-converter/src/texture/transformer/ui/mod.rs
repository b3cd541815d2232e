//! Transformers for HUD and GUI sprites.

mod locator;

pub use locator::LocatorTransformer;
