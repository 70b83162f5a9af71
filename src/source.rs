//! Reading markup source from files or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),
}

/// Returns true if `path` refers to standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read markup source from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    if is_stdin(path) {
        let mut buf = String::new();
        return match std::io::stdin().read_to_string(&mut buf) {
            Ok(_) => Ok(buf),
            Err(err) => Err(map_io_error(path, err)),
        };
    }
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let source = std::fs::read_to_string(path).map_err(|err| map_io_error(path, err))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded markup source");
    Ok(source)
}

fn map_io_error(path: &Path, err: std::io::Error) -> SourceError {
    match err.kind() {
        std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::InvalidData => SourceError::InvalidUtf8(path.to_path_buf()),
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_source_returns_file_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "***Title***\nbody").unwrap();
        assert_eq!(read_source(&path).unwrap(), "***Title***\nbody");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8(_)), "got {err:?}");
    }

    #[test]
    fn test_dash_means_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-x")));
    }
}
