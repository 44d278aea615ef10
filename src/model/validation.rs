use thiserror::Error;

use super::draft::BookingDraft;

/// Maximum number of players a single lane can take.
pub const MAX_PLAYERS_PER_LANE: u32 = 4;

/// Reasons a [`BookingDraft`] cannot be submitted.
///
/// Variants are listed in the order they are checked; only the first failing
/// rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Alla fälten måste vara ifyllda")]
    MissingFields,
    #[error("Det får vara max 4 spelare per bana")]
    TooManyPlayers,
    #[error("Antalet skor måste stämma överens med antal spelare")]
    ShoeCountMismatch,
    #[error("Alla skor måste vara ifyllda")]
    MissingShoeSize,
}

/// Validates a draft, returning the first rule it breaks.
pub fn validate_draft(draft: &BookingDraft) -> Result<(), BookingError> {
    if draft.date.trim().is_empty()
        || draft.time.trim().is_empty()
        || draft.players == 0
        || draft.lanes == 0
    {
        return Err(BookingError::MissingFields);
    }
    if draft.players > draft.lanes.saturating_mul(MAX_PLAYERS_PER_LANE) {
        return Err(BookingError::TooManyPlayers);
    }
    if draft.shoes().len() != draft.players as usize {
        return Err(BookingError::ShoeCountMismatch);
    }
    if draft.shoes().iter().any(|shoe| shoe.size.trim().is_empty()) {
        return Err(BookingError::MissingShoeSize);
    }
    Ok(())
}
