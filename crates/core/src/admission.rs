//! Room-admission and ban-reversal state rules.
//!
//! Pure decisions over a participation snapshot; the repository layer
//! loads the snapshot inside a transaction, asks here what to do, and
//! applies the answer. Ban takes precedence over every other check: a
//! banned user is refused even when re-joining or when the room is
//! otherwise full.

/// The join/ban flags of one `(utente, stanza)` participation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartecipazioneFlags {
    pub in_stanza: bool,
    pub bannato: bool,
}

/// Outcome of a room-access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// No participation row exists yet; create one, joined.
    JoinNew,
    /// A row exists but the user is not in the room; mark it joined.
    JoinExisting,
    /// The user is already in the room; nothing to change.
    AlreadyPresent,
    /// The user is banned from this room; no state mutation.
    Banned,
    /// The room is at capacity; no state mutation.
    Full,
}

/// Decide a room-access request.
///
/// `occupancy` is the number of users currently in the room and
/// `max_posti` the room capacity. An already-joined caller is part of
/// the occupancy count, so idempotent re-joins succeed even at
/// capacity.
pub fn decide_access(
    existing: Option<PartecipazioneFlags>,
    occupancy: i64,
    max_posti: i32,
) -> AccessDecision {
    if let Some(flags) = existing {
        if flags.bannato {
            return AccessDecision::Banned;
        }
        if flags.in_stanza {
            return AccessDecision::AlreadyPresent;
        }
    }

    if occupancy >= i64::from(max_posti) {
        return AccessDecision::Full;
    }

    match existing {
        Some(_) => AccessDecision::JoinExisting,
        None => AccessDecision::JoinNew,
    }
}

/// Outcome of a ban-reversal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelBanDecision {
    /// No participation row exists for the pair; nothing to revert.
    Missing,
    /// The row exists but the user is not banned.
    NotBanned,
    /// Clear the ban flag.
    Revoke,
}

/// Decide a ban reversal.
///
/// Banning (and unbanning) only ever mutates an existing participation
/// row; an unknown pair is an error, never an implicit insert.
pub fn decide_cancel_ban(existing: Option<PartecipazioneFlags>) -> CancelBanDecision {
    match existing {
        None => CancelBanDecision::Missing,
        Some(flags) if !flags.bannato => CancelBanDecision::NotBanned,
        Some(_) => CancelBanDecision::Revoke,
    }
}
