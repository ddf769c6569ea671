use rand::Rng;
use std::collections::HashSet;

use crate::{
    error::ledger::LedgerError,
    model::event::{JoinCode, JOIN_CODE_LENGTH},
};

/// Upper bound on draws before reporting the code space as exhausted.
///
/// With 36^4 combinations this is only reachable when nearly every code is
/// taken.
pub const MAX_CODE_ATTEMPTS: usize = 10_000;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws one random join code from uppercase letters and digits.
pub fn generate_code<R: Rng>(rng: &mut R) -> JoinCode {
    let code: String = (0..JOIN_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    JoinCode::from_generated(code)
}

/// Draws join codes until one is not in `existing`.
///
/// # Arguments
/// - `existing` - Codes of all currently active events
/// - `rng` - Random source
///
/// # Returns
/// - `Ok(JoinCode)` - A code unique among `existing`
/// - `Err(LedgerError::CodeSpaceExhausted)` - No free code within `MAX_CODE_ATTEMPTS` draws
pub fn generate_unique_code<R: Rng>(
    existing: &HashSet<&JoinCode>,
    rng: &mut R,
) -> Result<JoinCode, LedgerError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let candidate = generate_code(rng);
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(LedgerError::CodeSpaceExhausted {
        attempts: MAX_CODE_ATTEMPTS,
    })
}
