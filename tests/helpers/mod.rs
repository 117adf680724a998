use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the bundled quote document
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/quotes.json")
}

/// Temporary directory holding a single quote document with arbitrary content
#[allow(dead_code)]
pub struct TestDocument {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDocument {
    pub fn with_content(content: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, content).context("Failed to write quote document")?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Known quote ids in the fixture
#[allow(dead_code)]
pub mod fixture_quotes {
    pub const COUNT: usize = 12;
    pub const UNEXAMINED_LIFE: i64 = 1;
    pub const BE_YOURSELF: i64 = 2; // markdown body
    pub const STAY_HUNGRY: i64 = 8; // markdown body
    pub const NONEXISTENT: i64 = 999;
}
