use thiserror::Error;

use crate::model::{event::JoinCode, member::MemberId};

/// Expected rejections from the event ledger.
///
/// These are per-request conditions, never fatal. Each carries only the
/// minimal context needed by the caller; user-facing wording lives in the
/// bot reply layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The creator already hosts an active event.
    #[error("Member {creator} is already hosting event {code}")]
    AlreadyHosting { creator: MemberId, code: JoinCode },

    /// The requested event id is not in the catalog.
    #[error("Unknown event type '{0}'")]
    UnknownEventType(String),

    /// No active event uses this code. Holds the code as the member typed it.
    #[error("No active event with code '{0}'")]
    InvalidCode(String),

    /// The member is already enrolled in the event.
    #[error("Member {participant} already joined event {code}")]
    AlreadyJoined { participant: MemberId, code: JoinCode },

    /// The member does not host an active event.
    #[error("Member {0} is not hosting an event")]
    NotHosting(MemberId),

    /// The kick target is not enrolled in the host's event.
    #[error("Member {target} is not a participant of event {code}")]
    TargetNotParticipant { target: MemberId, code: JoinCode },

    /// A host tried to kick themselves; hosts leave through `stop`.
    #[error("Member {0} cannot kick themselves")]
    CannotKickSelf(MemberId),

    /// No free join code was found within the retry limit.
    #[error("No free join code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}
