//! Asynchronous avatar loading for the contact card.

pub mod loader;
pub mod state;
pub mod worker;

pub use state::{AvatarState, SPINNER_FRAMES};
