//! Thumbnail grid core for the stamps browser
//!
//! A directory scan produces a sorted [`TileCollection`]; a [`Surface`] lays
//! the tiles out in a grid that reflows with the window width and tracks
//! per-tile and select-all selection.

pub mod error;
pub mod scan;
pub mod state;

pub use error::{Result, StampError};
pub use scan::{CandidateSource, DirectorySource, ScanResult};
pub use state::collection::{build_collection, tile_at, TileCollection};
pub use state::data::{Appearance, Footprint, Position, Tile};
pub use state::layout::layout;
pub use state::selection::{toggle, SelectionController};
pub use state::settings::Settings;
pub use state::surface::Surface;
