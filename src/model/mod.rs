//! Domain models for the event ledger.
//!
//! These types are shared by the service layer, the snapshot repositories and
//! the bot surface. Identifiers are strongly typed and validated when snapshot
//! files are deserialized.

pub mod catalog;
pub mod event;
pub mod member;
pub mod record;
