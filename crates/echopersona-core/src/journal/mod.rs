//! Journal entries and the in-memory journal slice.

mod entry;
mod state;

pub use entry::JournalEntry;
pub use state::JournalState;
