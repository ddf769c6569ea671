use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

use crate::{
    error::TestError,
    fixture::catalog::{catalog_json, EventTypeFixture},
};

/// Test context holding a temporary workspace for one test.
///
/// The workspace contains the catalog document and the data directory used by
/// the snapshot repositories. Everything is deleted when the context drops, so
/// keep the context alive for the duration of the test.
pub struct TestContext {
    /// Temporary root directory. Owned so it lives as long as the context.
    root: TempDir,

    /// Path of the catalog document (`<root>/config.json`).
    pub catalog_path: PathBuf,

    /// Directory for snapshot documents (`<root>/data`).
    pub data_dir: PathBuf,
}

impl TestContext {
    /// Creates an empty workspace with a data directory and no catalog yet.
    pub fn new() -> Result<Self, TestError> {
        let root = tempfile::tempdir()?;
        let catalog_path = root.path().join("config.json");
        let data_dir = root.path().join("data");

        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            root,
            catalog_path,
            data_dir,
        })
    }

    /// Root of the temporary workspace.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes the catalog document from fixtures, replacing any previous one.
    pub fn write_catalog(&self, event_types: &[EventTypeFixture]) -> Result<(), TestError> {
        fs::write(&self.catalog_path, catalog_json(event_types))?;
        Ok(())
    }

    /// Reads the catalog document as written to disk.
    pub fn catalog_document(&self) -> Result<String, TestError> {
        Ok(fs::read_to_string(&self.catalog_path)?)
    }

    /// Writes a raw document into the data directory, creating parent folders.
    pub fn write_data_file(&self, file: &str, content: &str) -> Result<(), TestError> {
        let path = self.data_dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Reads a document from the data directory.
    pub fn read_data_file(&self, file: &str) -> Result<String, TestError> {
        Ok(fs::read_to_string(self.data_dir.join(file))?)
    }

    /// Reads and parses a document from the data directory.
    pub fn read_data_json(&self, file: &str) -> Result<serde_json::Value, TestError> {
        Ok(serde_json::from_str(&self.read_data_file(file)?)?)
    }

    pub fn data_file_exists(&self, file: &str) -> bool {
        self.data_dir.join(file).exists()
    }

    /// Lists files in a subdirectory of the data directory, sorted by name.
    ///
    /// Returns an empty list when the subdirectory does not exist.
    pub fn list_data_dir(&self, dir: &str) -> Result<Vec<PathBuf>, TestError> {
        let path = self.data_dir.join(dir);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut files = fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?;
        files.sort();

        Ok(files)
    }
}
