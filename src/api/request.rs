use serde::Serialize;

use crate::model::{BookingDraft, BookingError, total_price, validate_draft};

/// Body of a booking request.
///
/// Only constructible from a draft that passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    date: String,
    time: String,
    player_count: u32,
    lane_count: u32,
    shoe_sizes: Vec<String>,
    #[serde(skip)]
    price: u32,
}

impl BookingRequest {
    /// Validates `draft` and snapshots it into a request.
    ///
    /// Shoe sizes are sent in entry order; entry identifiers are dropped.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, BookingError> {
        validate_draft(draft)?;
        Ok(Self {
            date: draft.date.trim().to_string(),
            time: draft.time.trim().to_string(),
            player_count: draft.players,
            lane_count: draft.lanes,
            shoe_sizes: draft
                .shoes()
                .iter()
                .map(|shoe| shoe.size.trim().to_string())
                .collect(),
            price: total_price(draft.players, draft.lanes),
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    pub fn lane_count(&self) -> u32 {
        self.lane_count
    }

    pub fn shoe_sizes(&self) -> &[String] {
        &self.shoe_sizes
    }

    /// Total price computed when the request was built.
    pub fn price(&self) -> u32 {
        self.price
    }
}
