//! Actions returned by screen event handlers.

use crate::api::BookingRequest;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to run side effects and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen without a payload.
    Navigate(Screen),
    /// Send a validated booking to the API.
    Submit(BookingRequest),
    /// Quit the application.
    Quit,
}
