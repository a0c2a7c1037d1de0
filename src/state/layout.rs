//! Grid layout engine
//!
//! Assigns every tile a (row, column) cell from its index in the collection.
//! Tiles flow left to right, top to bottom; the number of columns is however
//! many whole footprints fit in the available surface width (at least one).

use super::data::{Footprint, Position, Tile};
use crate::error::{Result, StampError};

/// Number of whole tile footprints that fit in `available_width`
///
/// Never returns zero: a surface narrower than one tile still gets one column.
/// Uses floor division so a grid never overflows the surface.
pub fn columns_for(footprint: Footprint, available_width: u32) -> Result<usize> {
    if available_width == 0 {
        return Err(StampError::InvalidWidth(available_width));
    }

    let columns = (available_width / footprint.width()).max(1);
    Ok(columns as usize)
}

/// Cell for the tile at `index` in a grid with `columns` columns
pub fn position_of(index: usize, columns: usize) -> Position {
    let columns = columns.max(1);
    Position::new(index / columns, index % columns)
}

/// Number of rows needed for `len` tiles
pub fn rows_for(len: usize, columns: usize) -> usize {
    len.div_ceil(columns.max(1))
}

/// Lay out `tiles` in collection order and return the column count
///
/// Every tile's position is rewritten, even if its cell doesn't change.
/// Calling this twice with the same arguments gives the same positions.
pub fn layout(tiles: &mut [Tile], footprint: Footprint, available_width: u32) -> Result<usize> {
    let columns = columns_for(footprint, available_width)?;

    for (index, tile) in tiles.iter_mut().enumerate() {
        tile.position = position_of(index, columns);
    }

    log::debug!(
        "📐 Laid out {} tiles at width {} → {} columns",
        tiles.len(),
        available_width,
        columns
    );

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 200;

    fn footprint() -> Footprint {
        Footprint::new(W, 240).unwrap()
    }

    fn tiles(count: usize) -> Vec<Tile> {
        (0..count)
            .map(|i| Tile::new(format!("mission_data/{:02}.img", i), true))
            .collect()
    }

    fn positions(tiles: &[Tile]) -> Vec<(usize, usize)> {
        tiles.iter().map(|t| (t.row(), t.column())).collect()
    }

    #[test]
    fn test_columns_never_zero() {
        assert_eq!(columns_for(footprint(), 1).unwrap(), 1);
        assert_eq!(columns_for(footprint(), W - 1).unwrap(), 1);
        assert_eq!(columns_for(footprint(), W).unwrap(), 1);
    }

    #[test]
    fn test_columns_floor_division() {
        assert_eq!(columns_for(footprint(), 4 * W).unwrap(), 4);
        assert_eq!(columns_for(footprint(), 5 * W - 1).unwrap(), 4);
        assert_eq!(columns_for(footprint(), 5 * W).unwrap(), 5);
    }

    #[test]
    fn test_zero_width_rejected() {
        let mut grid = tiles(3);
        grid[2].position = Position::new(7, 7);

        let result = layout(&mut grid, footprint(), 0);

        assert!(matches!(result, Err(StampError::InvalidWidth(0))));
        // Rejected call leaves positions untouched
        assert_eq!(grid[2].position, Position::new(7, 7));
    }

    #[test]
    fn test_index_round_trips_through_position() {
        for width in [1, W, 3 * W + 17, 7 * W, 50 * W] {
            let mut grid = tiles(23);
            let columns = layout(&mut grid, footprint(), width).unwrap();
            for (index, tile) in grid.iter().enumerate() {
                assert!(tile.column() < columns);
                assert_eq!(tile.row() * columns + tile.column(), index);
            }
        }
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut grid = tiles(11);
        layout(&mut grid, footprint(), 3 * W).unwrap();
        let first = positions(&grid);
        layout(&mut grid, footprint(), 3 * W).unwrap();
        assert_eq!(first, positions(&grid));
    }

    #[test]
    fn test_columns_monotonic_in_width() {
        let mut previous = 0;
        for width in (1..20 * W).step_by(37) {
            let columns = columns_for(footprint(), width).unwrap();
            assert!(columns >= previous);
            previous = columns;
        }
    }

    #[test]
    fn test_empty_collection_is_noop() {
        let mut grid: Vec<Tile> = Vec::new();
        assert_eq!(layout(&mut grid, footprint(), 4 * W).unwrap(), 4);
    }

    #[test]
    fn test_single_tile_always_at_origin() {
        for width in [1, W, 10 * W] {
            let mut grid = tiles(1);
            layout(&mut grid, footprint(), width).unwrap();
            assert_eq!(grid[0].position, Position::new(0, 0));
        }
    }

    #[test]
    fn test_reflow_grow_and_shrink() {
        let mut grid = tiles(6);

        // Four columns
        assert_eq!(layout(&mut grid, footprint(), 4 * W).unwrap(), 4);
        assert_eq!(grid[4].position, Position::new(1, 0));
        assert_eq!(grid[5].position, Position::new(1, 1));

        // Grow to five: tile 4 moves up
        assert_eq!(layout(&mut grid, footprint(), 5 * W).unwrap(), 5);
        assert_eq!(grid[4].position, Position::new(0, 4));
        assert_eq!(grid[5].position, Position::new(1, 0));

        // Grow to six: everything on one row
        layout(&mut grid, footprint(), 6 * W).unwrap();
        assert_eq!(grid[5].position, Position::new(0, 5));

        // Shrink to two
        assert_eq!(layout(&mut grid, footprint(), 2 * W).unwrap(), 2);
        assert_eq!(
            positions(&grid),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_rows_for() {
        assert_eq!(rows_for(0, 4), 0);
        assert_eq!(rows_for(4, 4), 1);
        assert_eq!(rows_for(5, 4), 2);
        assert_eq!(rows_for(6, 1), 6);
    }
}
