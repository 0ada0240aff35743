//! memoir: an interactive journaling-suggestion picker
//!
//! A trigger presents a picker of remembered life events (contact
//! interactions, visited places) served by a pluggable suggestion
//! provider; the picked event renders as a contact card and/or a location
//! card. Suggestion ranking, permissions and image serving are host
//! capabilities behind trait seams, not implemented here.

pub mod app;
pub mod avatar;
pub mod cards;
pub mod config;
pub mod error;
pub mod picker;
pub mod suggestion;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;
