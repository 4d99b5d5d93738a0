//! Library error type.

use std::path::PathBuf;

/// Errors produced while loading, rendering or looking up output settings.
///
/// Encoding itself never fails; every variant here happens before a
/// [`CellGrid`](crate::grid::CellGrid) reaches the encoder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cell grid needs {expected} cells, got {actual}")]
    InvalidGrid { expected: usize, actual: usize },

    #[error("Cell grid must be at least 1x1")]
    EmptyGrid,

    #[error("Unknown dither algorithm '{0}' (expected none, ordered2, ordered4, ordered8, random or fstein)")]
    UnknownDither(String),

    #[error("Unknown output mode '{0}' (expected s, stdout, c, py, python, js, javascript, sh or bash)")]
    UnknownOutputMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
