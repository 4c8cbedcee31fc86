//! File-level scan orchestration.

use crate::analyzers::{python, scan_all_functions};
use crate::core::{metrics, FileReport, ScanError};
use crate::io::output::{create_destination_writer, create_writer, OutputFormat};
use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let report = analyze_path(&config.path)?;

    let mut writer = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            create_destination_writer(config.format, Box::new(file))
        }
        None => create_writer(config.format),
    };

    writer.write_report(&report)
}

/// Parse a file and score every function definition found in it, nested
/// definitions included. A parse failure aborts the whole file; individual
/// function scans cannot fail.
pub fn analyze_path(path: &Path) -> Result<FileReport, ScanError> {
    let source = crate::io::read_source(path)?;
    let root = python::parse_module(&source)?;
    let results = scan_all_functions(&root);
    debug!(
        "scored {} function(s) in {}",
        results.len(),
        path.display()
    );

    let summary = metrics::summarize(&results);
    Ok(FileReport {
        path: path.to_path_buf(),
        results,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn write_fixture(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.py");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_analyze_path_scores_every_function() {
        let (_dir, path) = write_fixture(indoc! {"
            def linear(xs):
                for x in xs:
                    touch(x)

            def fact(n):
                return n * fact(n - 1)
        "});

        let report = analyze_path(&path).unwrap();
        assert_eq!(report.summary.total_functions, 2);
        assert_eq!(report.results[0].coordinate.rank, 2.0);
        assert_eq!(report.results[1].coordinate.rank, 3.0);
    }

    #[test]
    fn test_analyze_path_missing_file() {
        let result = analyze_path(Path::new("does/not/exist.py"));
        assert!(matches!(result, Err(ScanError::FileSystem { .. })));
    }

    #[test]
    fn test_analyze_path_parse_error_aborts_file() {
        let (_dir, path) = write_fixture("def broken(:\n    pass\n");
        let result = analyze_path(&path);
        assert!(matches!(result, Err(ScanError::ParseFailure { .. })));
    }

    #[test]
    fn test_analyze_path_empty_module_reports_no_functions() {
        let (_dir, path) = write_fixture("VERSION = 3\n");
        let report = analyze_path(&path).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.summary.total_functions, 0);
    }
}
