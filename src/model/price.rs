/// Price per player, in SEK.
pub const PRICE_PER_PLAYER: u32 = 120;
/// Price per lane, in SEK.
pub const PRICE_PER_LANE: u32 = 100;

/// Total booking price in SEK. Saturates at `u32::MAX`.
pub fn total_price(players: u32, lanes: u32) -> u32 {
    players
        .saturating_mul(PRICE_PER_PLAYER)
        .saturating_add(lanes.saturating_mul(PRICE_PER_LANE))
}

/// Formats an amount for display, e.g. `580 sek`.
pub fn format_price(amount: u32) -> String {
    format!("{amount} sek")
}

/// Per-item breakdown, e.g. `4 × 120 sek + 1 × 100 sek`.
pub fn price_breakdown(players: u32, lanes: u32) -> String {
    format!("{players} × {PRICE_PER_PLAYER} sek + {lanes} × {PRICE_PER_LANE} sek")
}
