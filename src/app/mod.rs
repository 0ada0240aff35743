//! Top-level screen: state, event handling and rendering.

mod events;
mod render;
mod state;

pub use state::{App, JournalState, REVEAL_DURATION, RevealState, ease_in_out};
