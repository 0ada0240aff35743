//! Modal suggestion picker popup
//!
//! Stands in for the host-controlled picker surface: a centered list of
//! fetched suggestions with fuzzy filtering. Esc dismisses (a silent
//! no-op), Enter hands the picked payload back to the app.

pub mod events;
pub mod render;
mod state;

pub use events::{PickerOutcome, handle_key};
pub use render::render_popup;
pub use state::{MAX_VISIBLE_SUGGESTIONS, PickerState};
