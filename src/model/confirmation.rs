use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::price::{format_price, price_breakdown};

/// Formats accepted for the `when` timestamp, most specific last.
const WHEN_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

/// Immutable record of a successfully submitted booking.
///
/// Serialized with camelCase keys, matching both the API's `bookingDetails`
/// object and the copy kept in session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub when: String,
    pub people: u32,
    pub lanes: u32,
    pub price: u32,
}

impl BookingConfirmation {
    /// Returns `when` as `YYYY-MM-DD HH:MM`, or unchanged if it cannot be parsed.
    pub fn formatted_when(&self) -> String {
        let trimmed = self.when.trim_end_matches('Z');
        WHEN_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map_or_else(
                || self.when.clone(),
                |when| when.format("%Y-%m-%d %H:%M").to_string(),
            )
    }

    /// Returns the stored total, e.g. `580 sek`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }

    /// Returns the players/lanes breakdown behind the total.
    pub fn breakdown(&self) -> String {
        price_breakdown(self.people, self.lanes)
    }
}
