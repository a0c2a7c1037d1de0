use std::path::{Path, PathBuf};

use super::data::Tile;
use crate::error::{Result, StampError};
use crate::scan::CandidateSource;

/// The ordered set of tiles built from one directory scan.
///
/// Membership and order are fixed at construction: tiles are sorted by the
/// textual form of their path. Only `position` and `selected` on the member
/// tiles change afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileCollection {
    /// Every candidate, in enumeration order (for listings)
    names: Vec<PathBuf>,
    /// Candidates with a recognised image extension, in enumeration order
    inlist: Vec<PathBuf>,
    /// Compatible candidates, sorted
    tiles: Vec<Tile>,
}

impl TileCollection {
    /// Build a collection from candidate identifiers and a compatibility predicate.
    ///
    /// Incompatible identifiers stay visible through `names()` and `inlist()`
    /// but never get a tile.
    pub fn build<F>(candidates: Vec<PathBuf>, is_compatible: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        let inlist = candidates.clone();
        Self::assemble(candidates, inlist, is_compatible)
    }

    /// Build a collection by querying a candidate source.
    pub fn from_source<S: CandidateSource + ?Sized>(source: &S) -> Result<Self> {
        let names = source.list_candidates()?;
        let inlist: Vec<PathBuf> = names
            .iter()
            .filter(|path| source.is_listed(path.as_path()))
            .cloned()
            .collect();

        Ok(Self::assemble(names, inlist, |path| source.is_compatible(path)))
    }

    fn assemble<F>(names: Vec<PathBuf>, inlist: Vec<PathBuf>, is_compatible: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        let mut accepted: Vec<PathBuf> = Vec::new();
        for path in &inlist {
            if is_compatible(path.as_path()) {
                accepted.push(path.clone());
            } else {
                log::debug!("🚫 Not a displayable image: {}", path.display());
            }
        }

        // Sort by textual form, independent of enumeration order
        accepted.sort_by_cached_key(|path| path.to_string_lossy().into_owned());

        let tiles = accepted
            .into_iter()
            .map(|path| Tile::new(path, true))
            .collect();

        Self {
            names,
            inlist,
            tiles,
        }
    }

    pub fn names(&self) -> &[PathBuf] {
        &self.names
    }

    pub fn inlist(&self) -> &[PathBuf] {
        &self.inlist
    }

    /// Number of laid-out tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get a tile by index, failing on out-of-range access
    pub fn tile_at(&self, index: usize) -> Result<&Tile> {
        let len = self.tiles.len();
        self.tiles
            .get(index)
            .ok_or(StampError::IndexOutOfRange { index, len })
    }

    pub fn tile_at_mut(&mut self, index: usize) -> Result<&mut Tile> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(index)
            .ok_or(StampError::IndexOutOfRange { index, len })
    }

    /// Index of the tile for `identifier`, if it was laid out
    pub fn index_of(&self, identifier: &Path) -> Option<usize> {
        self.tiles.iter().position(|t| t.identifier() == identifier)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable view for the layout engine and the selection controller.
    /// A slice can't grow or reorder, so membership stays fixed.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Identifiers of the currently selected tiles, in collection order
    pub fn selected_identifiers(&self) -> Vec<&Path> {
        self.tiles
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.identifier())
            .collect()
    }
}

impl<'a> IntoIterator for &'a TileCollection {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Build a collection from candidate identifiers and a compatibility predicate
pub fn build_collection<F>(candidates: Vec<PathBuf>, is_compatible: F) -> TileCollection
where
    F: Fn(&Path) -> bool,
{
    TileCollection::build(candidates, is_compatible)
}

/// Get a tile by index, failing on out-of-range access
pub fn tile_at(collection: &TileCollection, index: usize) -> Result<&Tile> {
    collection.tile_at(index)
}
