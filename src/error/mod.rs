//! Error types for the event points bot.
//!
//! `AppError` is the top-level error returned from startup and from command
//! handlers. It wraps the domain-specific errors so handlers can use `?` on
//! ledger, persistence and Discord operations alike, while the bot boundary
//! decides how each kind is presented to the user.

pub mod config;
pub mod ledger;
pub mod persistence;

use thiserror::Error;

use crate::error::{config::ConfigError, ledger::LedgerError, persistence::PersistenceError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Only `ConfigErr`
/// is fatal, and only during startup; every other variant is a per-request
/// condition reported back to the invoking member.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or event catalog could not be loaded.
    ///
    /// Aborts startup before the bot connects to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// An expected, recoverable rejection from the event ledger.
    ///
    /// Mapped to a short user-facing message by the bot reply layer.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    /// Snapshot or archive file operation failed.
    ///
    /// Surfaces only where the failure must stop the operation, such as a
    /// reset whose archive could not be written.
    #[error(transparent)]
    PersistenceErr(#[from] PersistenceError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message.
    ///
    /// Logged in full, while the member only sees a generic message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
