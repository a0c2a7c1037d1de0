//! State management module
//!
//! This module handles all grid state, including:
//! - Tile and geometry data structures (data.rs)
//! - The sorted tile collection built from a scan (collection.rs)
//! - Row/column layout and reflow (layout.rs)
//! - Per-tile and bulk selection (selection.rs)
//! - The surface that ties them together (surface.rs)
//! - User settings (settings.rs)

pub mod collection;
pub mod data;
pub mod layout;
pub mod selection;
pub mod settings;
pub mod surface;
