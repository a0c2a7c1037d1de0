//! Directory scanning module
//!
//! This module handles:
//! - Enumerating candidate files in a mission directory
//! - Deciding which candidates are displayable PDS images
//! - Building the tile collection off the UI thread

pub mod directory;
pub mod pds;

use std::path::{Path, PathBuf};
use tokio::task;

pub use directory::DirectorySource;

use crate::error::Result;
use crate::state::collection::TileCollection;
use crate::state::settings::Settings;

/// Where tiles come from: a list of candidate files plus a yes/no on each.
///
/// The grid core only talks to this trait, so it can be driven by a
/// synthetic source in tests.
pub trait CandidateSource {
    /// Every candidate identifier, in enumeration order
    fn list_candidates(&self) -> Result<Vec<PathBuf>>;

    /// Whether the candidate is a displayable image
    fn is_compatible(&self, identifier: &Path) -> bool;

    /// Whether the candidate shows up in listings at all (e.g. by extension)
    fn is_listed(&self, _identifier: &Path) -> bool {
        true
    }
}

/// Result of a folder scan
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub root: PathBuf,
    pub collection: TileCollection,
    /// Listed files that turned out not to be displayable
    pub rejected: usize,
}

/// Scan a folder and build its tile collection (blocking)
pub fn scan_folder(root: &Path, settings: &Settings) -> Result<ScanResult> {
    log::info!("🔍 Scanning folder: {}", root.display());

    let source = DirectorySource::new(root, settings);
    let collection = TileCollection::from_source(&source)?;
    let rejected = collection.inlist().len() - collection.len();

    log::info!(
        "✅ Scan complete: {} files, {} listed, {} displayable, {} rejected",
        collection.names().len(),
        collection.inlist().len(),
        collection.len(),
        rejected
    );

    Ok(ScanResult {
        root: root.to_path_buf(),
        collection,
        rejected,
    })
}

/// Scan a folder on a background thread
///
/// Errors are flattened to strings so the result can travel in a UI message.
pub async fn scan_folder_async(root: PathBuf, settings: Settings) -> std::result::Result<ScanResult, String> {
    // Spawn blocking because probing labels means reading every file
    task::spawn_blocking(move || scan_folder(&root, &settings).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}
