pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::ScanError;
use std::fs;
use std::path::Path;

pub fn read_source(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|e| {
        ScanError::file_system(
            format!("failed to read '{}'", path.display()),
            path.to_path_buf(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file_is_file_system_error() {
        let result = read_source(Path::new("definitely/not/here.py"));
        assert!(matches!(result, Err(ScanError::FileSystem { .. })));
    }

    #[test]
    fn test_read_source_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.py");
        fs::write(&path, "x = 1\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "x = 1\n");
    }
}
