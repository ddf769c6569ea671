//! Event Points Test Utils
//!
//! Provides shared testing utilities for the event points bot. This crate offers a
//! builder pattern for creating test contexts backed by a temporary directory that
//! holds an event catalog file and a data directory for JSON snapshots.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Temporary workspace with catalog and data directory
//! - **fixture**: In-memory test data (catalog entries, member ids, timestamps)
//! - **serenity**: Serenity API objects built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_event_flow() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_event_type(fixture::catalog::trivia())
//!         .build()?;
//!
//!     let catalog = test.catalog_document()?;
//!     // Load the catalog, point a JsonStore at test.data_dir...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
