//! Error types shared by the grid, the selection state and the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the stamps core and its collaborators
#[derive(Debug, Error)]
pub enum StampError {
    /// A tile footprint with a zero dimension can't produce a grid
    #[error("invalid tile footprint {width}x{height}: both dimensions must be positive")]
    InvalidFootprint { width: u32, height: u32 },

    /// The surface is too narrow to lay anything out (zero width)
    #[error("invalid surface width {0}: must be positive")]
    InvalidWidth(u32),

    /// Index-based access past the end of the collection
    #[error("tile index {index} out of range (collection has {len} tiles)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A click was routed to an identifier that has no tile
    #[error("no tile for {0}")]
    UnknownTile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StampError>;
