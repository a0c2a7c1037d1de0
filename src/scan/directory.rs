use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{pds, CandidateSource};
use crate::error::Result;
use crate::state::settings::Settings;

/// Candidate source backed by a directory on disk
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    /// Lowercase extensions without the dot; empty = list everything
    extensions: Vec<String>,
    recursive: bool,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self {
            root: root.into(),
            extensions: settings
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            recursive: settings.recursive,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CandidateSource for DirectorySource {
    /// All regular files under the root, in enumeration order
    fn list_candidates(&self) -> Result<Vec<PathBuf>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut candidates = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself is unreadable: nothing to show
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    log::warn!("⚠️  Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() {
                candidates.push(entry.into_path());
            }
        }

        Ok(candidates)
    }

    fn is_compatible(&self, identifier: &Path) -> bool {
        pds::is_displayable(identifier)
    }

    fn is_listed(&self, identifier: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        match identifier.extension() {
            Some(extension) => {
                let ext = extension.to_string_lossy().to_lowercase();
                self.extensions.contains(&ext)
            }
            None => false,
        }
    }
}
