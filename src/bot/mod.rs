//! Discord surface of the event points bot.
//!
//! A poise framework on top of a serenity client. Commands are registered in
//! the framework setup, globally or in a single guild when
//! `DISCORD_GUILD_ID` is configured. The bot only needs non-privileged
//! gateway intents: member names are fetched over HTTP when a reply needs
//! them.

pub mod commands;
pub mod handler;
pub mod reply;
pub mod start;
