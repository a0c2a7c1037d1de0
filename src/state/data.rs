//! Shared data structures for the grid state
//!
//! These structs represent the data model that flows between
//! the scanner, the layout engine and the UI layer.

use std::path::{Path, PathBuf};

use crate::error::{Result, StampError};

/// A (row, column) cell in the thumbnail grid, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// The fixed on-screen space reserved for one tile, margins included
///
/// Both dimensions are guaranteed positive once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    width: u32,
    height: u32,
}

impl Footprint {
    /// Create a footprint, rejecting zero dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StampError::InvalidFootprint { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Binary visual state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Selected,
    NotSelected,
}

impl Appearance {
    /// Border colour as 8-bit RGB
    /// - Selected: white
    /// - Not selected: amber
    pub fn border_rgb(&self) -> (u8, u8, u8) {
        match self {
            Appearance::Selected => (255, 255, 255),
            Appearance::NotSelected => (240, 198, 0),
        }
    }

    /// Border thickness in logical pixels (same for both states)
    pub const BORDER_WIDTH: f32 = 3.0;
}

impl From<bool> for Appearance {
    fn from(selected: bool) -> Self {
        if selected {
            Appearance::Selected
        } else {
            Appearance::NotSelected
        }
    }
}

/// Represents a single image file as a grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Path to the underlying image file
    identifier: PathBuf,
    /// Whether the file is a displayable PDS image (decided by the scanner)
    compatible: bool,
    /// Toggled by clicks and by select-all
    pub selected: bool,
    /// Current grid cell, rewritten by every layout pass
    pub position: Position,
}

impl Tile {
    /// Create an unselected tile at the origin
    pub fn new(identifier: impl Into<PathBuf>, compatible: bool) -> Self {
        Self::at(identifier, compatible, 0, 0)
    }

    /// Create an unselected tile at an explicit grid cell
    pub fn at(identifier: impl Into<PathBuf>, compatible: bool, row: usize, column: usize) -> Self {
        Self {
            identifier: identifier.into(),
            compatible,
            selected: false,
            position: Position::new(row, column),
        }
    }

    pub fn identifier(&self) -> &Path {
        &self.identifier
    }

    pub fn compatible(&self) -> bool {
        self.compatible
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// File name only (e.g., "2m132591087cfd1800p2977m2f1.img"), for labels
    pub fn file_name(&self) -> String {
        self.identifier
            .file_name()
            .unwrap_or(self.identifier.as_os_str())
            .to_string_lossy()
            .to_string()
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::from(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_defaults() {
        let tile = Tile::new("mission_data/2p129641989eth0361p2600r8m1.img", true);
        assert_eq!(tile.position, Position::new(0, 0));
        assert!(!tile.selected);
        assert!(tile.compatible());
        assert_eq!(tile.appearance(), Appearance::NotSelected);
    }

    #[test]
    fn test_tile_at_explicit_cell() {
        let tile = Tile::at("mission_data/0047MH0000110010100214C00_DRCL.IMG", false, 10, 342);
        assert_eq!(tile.row(), 10);
        assert_eq!(tile.column(), 342);
        assert!(!tile.compatible());
        assert_eq!(tile.file_name(), "0047MH0000110010100214C00_DRCL.IMG");
    }

    #[test]
    fn test_footprint_rejects_zero() {
        assert!(matches!(
            Footprint::new(0, 100),
            Err(StampError::InvalidFootprint { width: 0, height: 100 })
        ));
        assert!(Footprint::new(100, 0).is_err());
        assert!(Footprint::new(1, 1).is_ok());
    }

    #[test]
    fn test_appearance_colours() {
        assert_eq!(Appearance::from(true).border_rgb(), (255, 255, 255));
        assert_eq!(Appearance::from(false).border_rgb(), (240, 198, 0));
    }
}
