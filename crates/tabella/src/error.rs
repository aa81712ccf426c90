//! Error types for table rendering.
//!
//! This module provides [`RenderError`], the primary error type for all
//! rendering operations. It abstracts over the underlying template engine's
//! errors, providing a stable public API.

use std::fmt;

/// Error type for table rendering and embedding operations.
///
/// This error type provides a stable API that doesn't expose implementation
/// details of the underlying template engine. All public rendering functions
/// return this type.
#[derive(Debug)]
pub enum RenderError {
    /// Document skeleton syntax error or render failure.
    TemplateError(String),

    /// Context or palette serialization error.
    SerializationError(String),

    /// Dataset construction violated the equal-length column invariant.
    DatasetError(String),

    /// I/O error from a surface implementation (e.g. writing a preview file).
    IoError(std::io::Error),

    /// Failure reported by the host surface.
    SurfaceError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::DatasetError(msg) => write!(f, "dataset error: {}", msg),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
            RenderError::SurfaceError(msg) => write!(f, "surface error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

// Keeps engine error details out of the public error surface.
impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}
