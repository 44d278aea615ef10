//! TUI screen implementations.

pub mod booking;
pub mod confirmation;

pub use booking::{BookingState, Focus, draw_booking};
pub use confirmation::{ConfirmationState, NO_BOOKING_MESSAGE, draw_confirmation};
