//! Per-tile and bulk selection
//!
//! Select-all is a stateful toggle: each call alternates between selecting
//! and deselecting every tile. It never looks at how many tiles are
//! currently selected, and individual clicks never move the toggle.

use super::data::Tile;

/// Flip a single tile's selection flag and return the new value
///
/// The caller is responsible for refreshing the tile's appearance.
pub fn toggle(tile: &mut Tile) -> bool {
    tile.selected = !tile.selected;
    tile.selected
}

/// Owns the select-all toggle flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionController {
    /// true = the next select-all selects everything
    selected_all_toggle: bool,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            selected_all_toggle: true,
        }
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_all_toggle(&self) -> bool {
        self.selected_all_toggle
    }

    /// Set every tile to the current toggle value, then flip the toggle
    ///
    /// Returns the value that was applied to the tiles. An empty slice is
    /// left alone and the toggle does not move.
    pub fn select_all(&mut self, tiles: &mut [Tile]) -> bool {
        let value = self.selected_all_toggle;
        if tiles.is_empty() {
            return value;
        }

        for tile in tiles.iter_mut() {
            tile.selected = value;
        }
        self.selected_all_toggle = !value;

        log::debug!(
            "{} {} tiles",
            if value { "☑️  Selected" } else { "⬜ Deselected" },
            tiles.len()
        );

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(count: usize) -> Vec<Tile> {
        (0..count)
            .map(|i| Tile::new(format!("{}.img", i), true))
            .collect()
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut tile = Tile::new("a.img", true);
        assert!(toggle(&mut tile));
        assert!(!toggle(&mut tile));
        assert!(!tile.selected);
    }

    #[test]
    fn test_toggle_does_not_touch_flag() {
        let controller = SelectionController::new();
        let mut grid = tiles(2);
        toggle(&mut grid[0]);
        assert!(controller.selected_all_toggle());
        assert!(!grid[1].selected);
    }

    #[test]
    fn test_select_all_alternates() {
        let mut controller = SelectionController::new();
        let mut grid = tiles(5);

        for call in 1..=6 {
            let applied = controller.select_all(&mut grid);
            let odd = call % 2 == 1;
            assert_eq!(applied, odd);
            assert!(grid.iter().all(|t| t.selected == odd));
            assert_eq!(controller.selected_all_toggle(), !odd);
        }
    }

    #[test]
    fn test_select_all_ignores_partial_selection() {
        let mut controller = SelectionController::new();
        let mut grid = tiles(3);

        controller.select_all(&mut grid);
        assert!(!controller.selected_all_toggle());

        // Deselecting one tile does not "repair" the toggle
        toggle(&mut grid[0]);
        assert!(!controller.selected_all_toggle());

        controller.select_all(&mut grid);
        assert!(grid.iter().all(|t| !t.selected));
        assert!(controller.selected_all_toggle());
    }

    #[test]
    fn test_select_all_with_manual_selection_first() {
        let mut controller = SelectionController::new();
        let mut grid = tiles(3);

        // Everything already selected by hand; the flag still says "select"
        for tile in grid.iter_mut() {
            toggle(tile);
        }
        assert!(controller.select_all(&mut grid));
        assert!(grid.iter().all(|t| t.selected));
        assert!(!controller.selected_all_toggle());
    }

    #[test]
    fn test_select_all_on_empty_is_noop() {
        let mut controller = SelectionController::new();
        let mut grid: Vec<Tile> = Vec::new();
        controller.select_all(&mut grid);
        assert!(controller.selected_all_toggle());
    }
}
