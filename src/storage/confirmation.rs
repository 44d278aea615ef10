use super::error::StorageError;
use super::session::SessionStorage;
use crate::model::BookingConfirmation;

/// Session storage key holding the JSON-encoded latest confirmation.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Stores a confirmation as JSON under [`CONFIRMATION_KEY`].
pub fn save_confirmation<S: SessionStorage + ?Sized>(
    storage: &mut S,
    confirmation: &BookingConfirmation,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(confirmation)?;
    storage.set_item(CONFIRMATION_KEY, &json)?;
    tracing::debug!(booking_id = %confirmation.booking_id, "confirmation saved to session storage");
    Ok(())
}

/// Reads the confirmation stored under [`CONFIRMATION_KEY`], if any.
///
/// Returns [`StorageError::Json`] when a value is present but is not a
/// confirmation.
pub fn load_confirmation<S: SessionStorage + ?Sized>(
    storage: &S,
) -> Result<Option<BookingConfirmation>, StorageError> {
    storage
        .get_item(CONFIRMATION_KEY)?
        .map(|json| serde_json::from_str(&json).map_err(StorageError::Json))
        .transpose()
}
