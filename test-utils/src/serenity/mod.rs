//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::user::create_test_user;
//!
//! let user = create_test_user(123456789, "moonman", Some("Moon Man"));
//! ```

pub mod user;

pub use user::create_test_user;
