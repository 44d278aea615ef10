//! Tab-scoped session storage and the booking confirmation kept in it.
//!
//! Storage is a capability passed to whoever needs it. [`MemoryStorage`]
//! lives for the process; [`FileStorage`] keeps one `<key>.json` file per key
//! so a confirmation survives restarting the client.

mod confirmation;
mod error;
mod session;

pub use confirmation::{CONFIRMATION_KEY, load_confirmation, save_confirmation};
pub use error::StorageError;
pub use session::{FileStorage, MemoryStorage, SessionStorage};
