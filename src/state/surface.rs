use std::path::Path;

use super::collection::TileCollection;
use super::data::{Appearance, Footprint, Tile};
use super::layout;
use super::selection::{self, SelectionController};
use crate::error::{Result, StampError};

/// The top-level grid: owns the tiles, the current geometry and the
/// select-all toggle.
///
/// Events (clicks, resizes, select-all) are applied one at a time by the
/// hosting event loop.
#[derive(Debug, Clone)]
pub struct Surface {
    collection: TileCollection,
    footprint: Footprint,
    /// Current available width in logical pixels
    width: u32,
    /// Column count from the last successful layout
    columns: usize,
    selection: SelectionController,
}

impl Surface {
    /// Create the surface and run the initial layout at `width`
    pub fn new(mut collection: TileCollection, footprint: Footprint, width: u32) -> Result<Self> {
        let columns = layout::layout(collection.tiles_mut(), footprint, width)?;

        log::info!(
            "🖼️  Surface ready: {} tiles in {} columns ({}px wide)",
            collection.len(),
            columns,
            width
        );

        Ok(Self {
            collection,
            footprint,
            width,
            columns,
            selection: SelectionController::new(),
        })
    }

    /// Reflow the grid for a new surface width and return the column count
    ///
    /// A zero width is rejected and the previous layout is kept.
    pub fn resize(&mut self, width: u32) -> Result<usize> {
        if width == self.width {
            log::debug!("Resize to same width {}, layout unchanged", width);
            return Ok(self.columns);
        }

        let columns = match layout::layout(self.collection.tiles_mut(), self.footprint, width) {
            Ok(columns) => columns,
            Err(e) => {
                log::warn!("⚠️  Ignoring resize to {}: {}", width, e);
                return Err(e);
            }
        };

        if columns != self.columns {
            log::info!("↔️  Reflow: {} → {} columns", self.columns, columns);
        }

        self.width = width;
        self.columns = columns;
        Ok(columns)
    }

    /// Toggle the tile at `index` and return its new selection state
    pub fn click(&mut self, index: usize) -> Result<bool> {
        let tile = self.collection.tile_at_mut(index)?;
        Ok(selection::toggle(tile))
    }

    /// Toggle the tile for `identifier` and return its index
    pub fn click_identifier(&mut self, identifier: &Path) -> Result<usize> {
        let index = self
            .collection
            .index_of(identifier)
            .ok_or_else(|| StampError::UnknownTile(identifier.to_path_buf()))?;
        self.click(index)?;
        Ok(index)
    }

    /// Bulk select or deselect, alternating on each call
    pub fn select_all(&mut self) -> bool {
        self.selection.select_all(self.collection.tiles_mut())
    }

    pub fn selected_all_toggle(&self) -> bool {
        self.selection.selected_all_toggle()
    }

    pub fn tile_at(&self, index: usize) -> Result<&Tile> {
        self.collection.tile_at(index)
    }

    /// Visual state the tile at `index` should be drawn with
    pub fn appearance(&self, index: usize) -> Result<Appearance> {
        Ok(self.tile_at(index)?.appearance())
    }

    pub fn tiles(&self) -> &[Tile] {
        self.collection.tiles()
    }

    pub fn collection(&self) -> &TileCollection {
        &self.collection
    }

    pub fn selected_identifiers(&self) -> Vec<&Path> {
        self.collection.selected_identifiers()
    }

    pub fn selected_count(&self) -> usize {
        self.collection.iter().filter(|t| t.selected).count()
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        layout::rows_for(self.collection.len(), self.columns)
    }
}
