use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Prefix toggled when none is given on the command line.
pub const DEFAULT_PREFIX: &str = "1905005_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("prefix must not be empty")]
    EmptyPrefix,

    #[error("prefix {prefix:?} must be a plain file-name fragment (no path separators or NUL)")]
    InvalidPrefix { prefix: String },

    #[error("root {path} is not a directory")]
    NotADirectory { path: Utf8PathBuf },

    #[error("root must be valid UTF-8: {}", .path.display())]
    NonUtf8Root { path: PathBuf },

    #[error("failed to resolve root {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where to start walking and which prefix to toggle.
#[derive(Clone, Debug)]
pub struct RenameConfig {
    pub root: Utf8PathBuf,
    pub prefix: String,
}

impl RenameConfig {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        let root = root.into();
        let resolved = root.canonicalize().map_err(|source| ConfigError::Resolve {
            path: root.clone(),
            source,
        })?;
        let root = Utf8PathBuf::from_path_buf(resolved)
            .map_err(|path| ConfigError::NonUtf8Root { path })?;
        if !root.is_dir() {
            return Err(ConfigError::NotADirectory { path: root });
        }

        Ok(Self { root, prefix })
    }

    /// Current working directory with [`DEFAULT_PREFIX`], the zero-argument invocation.
    pub fn from_cwd() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Resolve {
            path: PathBuf::from("."),
            source,
        })?;
        Self::new(cwd, DEFAULT_PREFIX)
    }

    /// Same root, different prefix.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { prefix, ..self })
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::EmptyPrefix);
    }
    let bad = |c: char| c == '/' || c == '\0' || (cfg!(windows) && c == '\\');
    if prefix.contains(bad) {
        return Err(ConfigError::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn rejects_empty_prefix() {
        let tmp = tempdir().unwrap();
        let err = RenameConfig::new(tmp.path(), "").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPrefix), "got {err:?}");
    }

    #[test]
    fn rejects_prefix_with_separator() {
        let tmp = tempdir().unwrap();
        let err = RenameConfig::new(tmp.path(), "sub/dir_").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_file_as_root() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = RenameConfig::new(&file, DEFAULT_PREFIX).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_missing_root() {
        let tmp = tempdir().unwrap();
        let err = RenameConfig::new(tmp.path().join("nope"), DEFAULT_PREFIX).unwrap_err();
        assert!(matches!(err, ConfigError::Resolve { .. }), "got {err:?}");
    }

    #[test]
    fn from_cwd_uses_working_directory_and_default_prefix() {
        let config = RenameConfig::from_cwd().unwrap();
        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(config.root.as_std_path(), cwd.as_path());
        assert_eq!(config.prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn with_prefix_keeps_root_and_validates() {
        let tmp = tempdir().unwrap();
        let config = RenameConfig::new(tmp.path(), DEFAULT_PREFIX).unwrap();
        let root = config.root.clone();

        let swapped = config.clone().with_prefix("old_").unwrap();
        assert_eq!(swapped.root, root);
        assert_eq!(swapped.prefix, "old_");

        let err = config.with_prefix("").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPrefix), "got {err:?}");
    }

    #[test]
    fn canonicalizes_root() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("inner")).unwrap();
        let dotted = tmp.path().join("inner").join("..");

        let config = RenameConfig::new(&dotted, "p_").unwrap();
        let expected = tmp.path().canonicalize().unwrap();
        assert_eq!(config.root.as_std_path(), expected.as_path());
        assert_eq!(config.prefix, "p_");
    }
}
