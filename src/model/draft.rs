/// Stable identifier for a shoe-size entry within a [`BookingDraft`].
///
/// Only used to address entries while editing; never sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShoeId(u32);

/// One shoe-size entry. An empty `size` means the player has not filled it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeEntry {
    pub id: ShoeId,
    pub size: String,
}

/// A single edit to a [`BookingDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    /// Replace the booking date (`YYYY-MM-DD`).
    Date(String),
    /// Replace the booking time (`HH:MM`).
    Time(String),
    /// Replace the player count.
    Players(u32),
    /// Replace the lane count.
    Lanes(u32),
    /// Append an empty shoe-size entry with a fresh identifier.
    AddShoe,
    /// Remove the entry with the given identifier.
    RemoveShoe(ShoeId),
    /// Replace the size of the entry with the given identifier.
    ShoeSize(ShoeId, String),
}

/// In-progress, unsubmitted booking form state.
///
/// The number of shoe entries is independent of `players`; the two are only
/// compared when the draft is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub players: u32,
    pub lanes: u32,
    shoes: Vec<ShoeEntry>,
    next_shoe_id: u32,
}

impl BookingDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an edit, returning the identifier of a newly added shoe entry.
    ///
    /// Edits that address an unknown [`ShoeId`] leave the draft unchanged.
    pub fn apply(&mut self, edit: DraftEdit) -> Option<ShoeId> {
        match edit {
            DraftEdit::Date(date) => self.date = date,
            DraftEdit::Time(time) => self.time = time,
            DraftEdit::Players(players) => self.players = players,
            DraftEdit::Lanes(lanes) => self.lanes = lanes,
            DraftEdit::AddShoe => {
                let id = ShoeId(self.next_shoe_id);
                self.next_shoe_id += 1;
                self.shoes.push(ShoeEntry {
                    id,
                    size: String::new(),
                });
                return Some(id);
            }
            DraftEdit::RemoveShoe(id) => self.shoes.retain(|shoe| shoe.id != id),
            DraftEdit::ShoeSize(id, size) => {
                if let Some(shoe) = self.shoes.iter_mut().find(|shoe| shoe.id == id) {
                    shoe.size = size;
                }
            }
        }
        None
    }

    /// Returns the shoe-size entries in insertion order.
    pub fn shoes(&self) -> &[ShoeEntry] {
        &self.shoes
    }

    /// Returns the entry with the given identifier, if it is still present.
    pub fn shoe(&self, id: ShoeId) -> Option<&ShoeEntry> {
        self.shoes.iter().find(|shoe| shoe.id == id)
    }
}
