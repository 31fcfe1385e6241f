//! File-backed rows for the terminal explorer and the printer.
//!
//! Each line of a text file becomes one [`Row`]; the file path is the item
//! source identifier.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::pagination::ItemSource;

/// One line of the source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Row {
    /// 1-based line number in the source file.
    pub number: usize,
    pub text: String,
}

impl Row {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Split `contents` into numbered rows.
    pub fn from_lines(contents: &str) -> Vec<Row> {
        contents
            .lines()
            .enumerate()
            .map(|(index, line)| Row::new(index + 1, line))
            .collect()
    }
}

/// Resolves file paths, relative to an optional base directory, to rows.
#[derive(Debug, Clone, Default)]
pub struct RowSource {
    base_dir: Option<PathBuf>,
}

impl RowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl ItemSource<Row> for RowSource {
    fn resolve(&self, id: &str) -> Option<Vec<Row>> {
        let path = self.path_for(id);
        match read_rows(&path) {
            Ok(rows) => {
                log::debug!("Read {} rows from {}", rows.len(), path.display());
                Some(rows)
            }
            Err(e) => {
                log::warn!("Failed to read rows from {}: {}", path.display(), e);
                None
            }
        }
    }
}

fn read_rows(path: &Path) -> std::io::Result<Vec<Row>> {
    let contents = fs::read_to_string(path)?;
    Ok(Row::from_lines(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_lines_numbers_rows() {
        let rows = Row::from_lines("alpha\nbeta\n\ngamma\n");
        assert_eq!(
            rows,
            vec![
                Row::new(1, "alpha"),
                Row::new(2, "beta"),
                Row::new(3, ""),
                Row::new(4, "gamma"),
            ]
        );
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rows.txt"), "one\ntwo\n").unwrap();

        let source = RowSource::with_base_dir(dir.path());
        let rows = source.resolve("rows.txt").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Row::new(2, "two"));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = RowSource::with_base_dir(dir.path());
        assert!(source.resolve("nope.txt").is_none());
    }

    #[test]
    fn test_resolve_directory_is_not_a_collection() {
        let dir = TempDir::new().unwrap();
        let source = RowSource::new();
        assert!(source.resolve(&dir.path().to_string_lossy()).is_none());
    }
}
