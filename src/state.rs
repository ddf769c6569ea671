//! State shared with every command invocation.
//!
//! Poise hands a reference to `AppState` to each command through its context.
//! Built once in the framework setup and never replaced; the event service
//! inside is cheap to clone and synchronizes its own access.

use crate::{error::AppError, service::event::EventService};

pub struct AppState {
    /// Event ledger and its snapshot persistence.
    pub events: EventService,
}

impl AppState {
    pub fn new(events: EventService) -> Self {
        Self { events }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, AppState, AppError>;
