//! Data-driven rendering: cards, placeholders and display helpers.
//!
//! Nothing in here produces markup. A record becomes a `Card` (text plus
//! button descriptors); the presentation layer binds the descriptors to real
//! event handlers.

pub mod card;
pub mod format;
pub mod preview;
pub mod state;

pub use card::{ActionButton, ActionKind, Badge, ButtonStyle, Card, Detail, DetailSection, Note, NoteStyle, Tone};
pub use state::ViewState;
