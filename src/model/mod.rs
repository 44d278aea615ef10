mod confirmation;
mod draft;
mod price;
mod validation;

pub use confirmation::BookingConfirmation;
pub use draft::{BookingDraft, DraftEdit, ShoeEntry, ShoeId};
pub use price::{PRICE_PER_LANE, PRICE_PER_PLAYER, format_price, price_breakdown, total_price};
pub use validation::{BookingError, MAX_PLAYERS_PER_LANE, validate_draft};
