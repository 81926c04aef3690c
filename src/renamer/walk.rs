use camino::{Utf8Path, Utf8PathBuf};
use ignore::{DirEntry, WalkBuilder};

use super::error::FilesystemError;

/// A file discovered under the root, split into parent directory and base name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileEntry {
    pub dir: Utf8PathBuf,
    pub name: String,
}

impl FileEntry {
    pub fn path(&self) -> Utf8PathBuf {
        self.dir.join(&self.name)
    }
}

/// Enumerate every non-directory entry under `root`, depth-first and sorted
/// by name. The whole tree is listed before this returns, so callers can
/// rename freely without the walk seeing the new names.
pub fn collect_files(root: &Utf8Path) -> Result<Vec<FileEntry>, FilesystemError> {
    let mut files = Vec::new();

    for entry in WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = entry.map_err(|source| FilesystemError::Walk {
            root: root.to_owned(),
            source,
        })?;
        if !is_target(&entry) {
            continue;
        }
        files.push(split_entry(&entry)?);
    }

    Ok(files)
}

fn is_target(entry: &DirEntry) -> bool {
    let Some(file_type) = entry.file_type() else {
        return false;
    };
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() && entry.path().is_dir() {
        tracing::warn!(path = %entry.path().display(), "leaving directory symlink alone");
        return false;
    }
    true
}

fn split_entry(entry: &DirEntry) -> Result<FileEntry, FilesystemError> {
    let path = Utf8PathBuf::from_path_buf(entry.path().to_path_buf())
        .map_err(|path| FilesystemError::NonUtf8Path { path })?;
    match (path.parent(), path.file_name()) {
        (Some(dir), Some(name)) => Ok(FileEntry {
            dir: dir.to_owned(),
            name: name.to_string(),
        }),
        _ => Err(FilesystemError::NonUtf8Path {
            path: path.into_std_path_buf(),
        }),
    }
}
