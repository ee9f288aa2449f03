//! Deck module: turning detail payloads into commander records
//!
//! - `entry`: the `"<qty> <name>"` line parser
//! - `color`: color identity symbols and canonical ordering
//! - `detail`: metadata navigation and the two deck-list strategies

mod color;
mod detail;
mod entry;
mod types;

pub use color::{canonical_colors, Color};
pub use detail::{extract_commander, fetch_commander, ExtractOptions, MAX_GROUPED_CARDS};
pub use entry::parse_deck_entry;
pub use types::{Commander, DeckCard};
