use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// Read a whole document as text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` verbatim, replacing any existing file.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `.{ext}` when the chosen path has no extension of its own.
pub fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    if ext.is_empty() || path.extension().is_some() {
        path
    } else {
        path.with_extension(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let text = "line one\r\nline two\n\n  trailing  ";

        write_document(&path, text).unwrap();
        assert_eq!(read_document(&path).unwrap(), text);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, AppError::Read { ref path, .. } if path.ends_with("missing.txt")));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes"), "txt"),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes.md"), "txt"),
            PathBuf::from("/tmp/notes.md")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes"), ""),
            PathBuf::from("/tmp/notes")
        );
    }
}
