//! Location card
//!
//! Title, weekday+date, and an embedded map centered on the suggestion's
//! coordinate with a marker at the center. The caller only renders this
//! card when a coordinate exists, so the map always has a center.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Map, MapResolution},
    },
};

use crate::suggestion::{Coordinate, SuggestionResult};
use crate::theme;

use super::header_lines;

/// Maximum card height; the map shrinks before the header does
pub const LOCATION_CARD_MAX_HEIGHT: u16 = 15;

/// Half-width of the map viewport, in degrees of longitude.
/// Latitude uses half of this to roughly match terminal cell aspect.
const MAP_SPAN_LON: f64 = 12.0;

pub fn render_location_card(
    frame: &mut Frame,
    area: Rect,
    suggestion: &SuggestionResult,
    coordinate: Coordinate,
    reveal: f32,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Location ")
        .border_style(Style::default().fg(theme::faded(theme::card::BORDER, reveal)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([
        Constraint::Length(2), // Title + date header
        Constraint::Min(3),    // Embedded map
        Constraint::Length(1), // Coordinate caption
    ])
    .split(inner);

    let [title, date] = header_lines(suggestion, reveal);
    frame.render_widget(Paragraph::new(vec![title, date]), layout[0]);

    render_map(frame, layout[1], coordinate, reveal);

    let caption = Line::from(Span::styled(
        format!("{:.4}°, {:.4}°", coordinate.latitude, coordinate.longitude),
        Style::default().fg(theme::faded(theme::card::MAP_CAPTION, reveal)),
    ))
    .centered();
    frame.render_widget(Paragraph::new(caption), layout[2]);
}

fn render_map(frame: &mut Frame, area: Rect, coordinate: Coordinate, reveal: f32) {
    let span_lat = MAP_SPAN_LON / 2.0;

    let map = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([
            coordinate.longitude - MAP_SPAN_LON,
            coordinate.longitude + MAP_SPAN_LON,
        ])
        .y_bounds([
            coordinate.latitude - span_lat,
            coordinate.latitude + span_lat,
        ])
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: theme::faded(theme::card::MAP_LAND, reveal),
            });
            ctx.print(
                coordinate.longitude,
                coordinate.latitude,
                Line::from(Span::styled(
                    "◆",
                    Style::default()
                        .fg(theme::faded(theme::card::MAP_MARKER, reveal))
                        .add_modifier(Modifier::BOLD),
                )),
            );
        });

    frame.render_widget(map, area);
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod location_tests;
