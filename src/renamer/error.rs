use camino::Utf8PathBuf;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong while listing or renaming files.
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("refusing to rename {from} -> {to}: target already exists")]
    Collision { from: Utf8PathBuf, to: Utf8PathBuf },

    #[error("failed to walk {root}")]
    Walk {
        root: Utf8PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to rename {from} -> {to}")]
    Rename {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path must be valid UTF-8: {}; nothing was renamed", .path.display())]
    NonUtf8Path { path: PathBuf },
}
