mod error;
pub mod toggle;
pub mod walk;

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use pathdiff::diff_utf8_paths;

use crate::config::RenameConfig;

pub use error::FilesystemError;
pub use toggle::{Direction, toggle_name};
pub use walk::{FileEntry, collect_files};

/// One file and the name it will get.
#[derive(Clone, Debug)]
pub struct PlannedRename {
    pub entry: FileEntry,
    pub target: String,
    pub direction: Direction,
}

impl PlannedRename {
    pub fn source_path(&self) -> Utf8PathBuf {
        self.entry.path()
    }

    pub fn target_path(&self) -> Utf8PathBuf {
        self.entry.dir.join(&self.target)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenameSummary {
    pub stripped: usize,
    pub prepended: usize,
}

impl RenameSummary {
    pub fn total(&self) -> usize {
        self.stripped + self.prepended
    }
}

pub struct Renamer {
    config: RenameConfig,
}

impl Renamer {
    pub fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenameConfig {
        &self.config
    }

    /// Snapshot the tree and compute every rename without touching the disk.
    pub fn plan(&self) -> Result<Vec<PlannedRename>, FilesystemError> {
        let files = collect_files(&self.config.root)?;
        Ok(files
            .into_iter()
            .map(|entry| {
                let toggled = toggle_name(&entry.name, &self.config.prefix);
                PlannedRename {
                    entry,
                    target: toggled.name,
                    direction: toggled.direction,
                }
            })
            .collect())
    }

    /// Toggle the prefix on every file under the root.
    ///
    /// Stops at the first failure; renames already applied are kept.
    pub fn run(&self) -> Result<RenameSummary, FilesystemError> {
        let plan = self.plan()?;
        tracing::debug!(root = %self.config.root, files = plan.len(), "planned renames");

        let mut summary = RenameSummary::default();
        for rename in &plan {
            apply(rename)?;
            tracing::debug!(
                from = %relative(&self.config.root, &rename.source_path()),
                to = %rename.target,
                "renamed"
            );
            match rename.direction {
                Direction::Strip => summary.stripped += 1,
                Direction::Prepend => summary.prepended += 1,
            }
        }

        Ok(summary)
    }
}

/// Rename a single file within its directory, never replacing an existing entry.
pub fn apply(rename: &PlannedRename) -> Result<(), FilesystemError> {
    let from = rename.source_path();
    let to = rename.target_path();

    // std::fs::rename silently replaces the target on unix.
    match to.symlink_metadata() {
        Ok(_) => return Err(FilesystemError::Collision { from, to }),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(source) => return Err(FilesystemError::Rename { from, to, source }),
    }

    std::fs::rename(&from, &to).map_err(|source| FilesystemError::Rename { from, to, source })
}

fn relative(root: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    diff_utf8_paths(path, root).unwrap_or_else(|| path.to_owned())
}
