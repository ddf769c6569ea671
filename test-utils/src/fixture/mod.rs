//! Test fixtures providing reusable in-memory test data.
//!
//! Fixtures never touch the filesystem; use `TestBuilder` to write them into a
//! temporary workspace.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let host = fixture::member::next_member_id();
//! let start = fixture::time::base_time();
//! let end = fixture::time::minutes_after(start, 10);
//! let document = fixture::catalog::catalog_json(&[fixture::catalog::trivia()]);
//! ```

pub mod catalog;
pub mod member;
pub mod time;
