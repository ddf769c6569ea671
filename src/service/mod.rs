//! Business logic for the event ledger.
//!
//! - `points` - Point accrual for elapsed participation time
//! - `code` - Random join code generation
//! - `ledger` - Event lifecycle state machine and history queries
//! - `event` - Locked, persisting facade used by command handlers

pub mod code;
pub mod event;
pub mod ledger;
pub mod points;

#[cfg(test)]
mod test;
