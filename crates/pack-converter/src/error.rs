//! Error types for the pack converter.
//!
//! Everything that can go wrong while reading a Java pack, transforming its
//! textures or writing the Bedrock pack is funnelled into [`ConverterError`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pack converter.
#[derive(Debug, Error)]
pub enum ConverterError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Image error: {message}")]
    Image {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    #[error("Archive error: {message}")]
    Zip {
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },

    // Pack model errors
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid pack: {message}")]
    InvalidPack { message: String },

    #[error("Embedded resource not found: {0}")]
    MissingResource(String),

    #[error("Transformer {transformer} failed: {message}")]
    Transform { transformer: String, message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<image::ImageError> for ConverterError {
    fn from(err: image::ImageError) -> Self {
        ConverterError::Image {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<zip::result::ZipError> for ConverterError {
    fn from(err: zip::result::ZipError) -> Self {
        ConverterError::Zip {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ConverterError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ConverterError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether a single transformer may fail with this error without
    /// aborting the whole pack.
    ///
    /// Bad texture data or a missing embedded file only spoils the
    /// transformer that hit it. IO and archive failures on the output side
    /// do not get better by carrying on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConverterError::Image { .. }
                | ConverterError::Json { .. }
                | ConverterError::InvalidKey { .. }
                | ConverterError::MissingResource(_)
                | ConverterError::Transform { .. }
        )
    }
}
