//! Centralized color palette
//!
//! Every surface pulls its colors from here so the application has one
//! consistent look and render code stays free of literal colors.

use ratatui::style::Color;

/// Card surfaces (contact and location)
pub mod card {
    use super::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const TITLE: Color = Color::White;
    pub const WEEKDAY: Color = Color::Cyan;
    pub const DATE: Color = Color::Gray;
    pub const NAME: Color = Color::White;
    pub const AVATAR: Color = Color::Magenta;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const MAP_LAND: Color = Color::Green;
    pub const MAP_MARKER: Color = Color::Red;
    pub const MAP_CAPTION: Color = Color::Gray;
}

/// Suggestion picker popup
pub mod picker {
    use super::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const ITEM: Color = Color::White;
    pub const ITEM_DETAIL: Color = Color::Gray;
    pub const ITEM_SELECTED_BAR: Color = Color::Cyan;
    pub const ITEM_SELECTED_BG: Color = Color::Indexed(236);
    pub const NO_MATCHES: Color = Color::DarkGray;
    pub const FILTER_PROMPT: Color = Color::Cyan;
}

/// Picker trigger button (footer)
pub mod trigger {
    use super::Color;

    pub const BORDER: Color = Color::Blue;
    pub const LABEL: Color = Color::White;
    pub const BUSY: Color = Color::Yellow;
}

/// Empty-state hint text shown before the first pick
pub const EMPTY_STATE: Color = Color::DarkGray;

/// Approximate an alpha fade in a terminal by stepping brightness.
///
/// `alpha` is the reveal progress in `[0.0, 1.0]`; below full progress the
/// target color is replaced with a dimmer gray step.
pub fn faded(color: Color, alpha: f32) -> Color {
    if alpha >= 0.95 {
        color
    } else if alpha >= 0.5 {
        Color::Gray
    } else {
        Color::DarkGray
    }
}
