//! Ready event handler.
//!
//! Fired once per gateway connection after authentication. Command
//! registration happens in the framework setup; this only reports the
//! connection.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Logs the connected bot user and guild count.
pub async fn handle_ready(_ctx: &Context, ready: &Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );
}
