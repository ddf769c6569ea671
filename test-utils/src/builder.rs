use crate::{context::TestContext, error::TestError, fixture::catalog::EventTypeFixture};

/// Builder for creating test contexts with a catalog and optional snapshots.
///
/// Provides a fluent interface for configuring a temporary workspace. Add event
/// types and seed snapshot documents, then call `build()` to write everything
/// to disk.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_event_type(fixture::catalog::trivia())
///     .with_event_type(fixture::catalog::raid())
///     .with_data_file("event_records.json", "{\"records\": []}")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Event types written to the catalog document, in order.
    event_types: Vec<EventTypeFixture>,

    /// Documents written into the data directory before the test runs.
    ///
    /// Each entry is a path relative to the data directory and its raw content,
    /// which lets tests seed corrupt or legacy snapshots verbatim.
    data_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with an empty catalog and no data files.
    pub fn new() -> Self {
        Self {
            event_types: Vec::new(),
            data_files: Vec::new(),
        }
    }

    /// Adds an event type to the catalog document.
    pub fn with_event_type(mut self, event_type: EventTypeFixture) -> Self {
        self.event_types.push(event_type);
        self
    }

    /// Adds the standard catalog used across tests: trivia and raid.
    pub fn with_default_catalog(self) -> Self {
        self.with_event_type(crate::fixture::catalog::trivia())
            .with_event_type(crate::fixture::catalog::raid())
    }

    /// Seeds a document in the data directory.
    ///
    /// # Arguments
    /// - `file` - Path relative to the data directory
    /// - `content` - Raw file content, written verbatim
    pub fn with_data_file(mut self, file: impl Into<String>, content: impl Into<String>) -> Self {
        self.data_files.push((file.into(), content.into()));
        self
    }

    /// Builds the test context.
    ///
    /// Creates a temporary directory holding `config.json` (the catalog, in the
    /// `{"events": [...]}` form) and a `data/` directory with any seeded files.
    /// The directory is removed when the context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Workspace written successfully
    /// - `Err(TestError)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        context.write_catalog(&self.event_types)?;

        for (file, content) in &self.data_files {
            context.write_data_file(file, content)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
