//! Reusable widget helpers.

pub mod popup;
