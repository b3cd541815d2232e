//! Shared helpers for image handling and safe file output.

pub mod fs;
pub mod image;
