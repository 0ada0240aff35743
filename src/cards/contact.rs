//! Contact card
//!
//! Title, weekday+date, and a row pairing a circular avatar with the
//! contact's display name. While the avatar has no bytes (still loading,
//! no URL at all, or the fetch failed) the circle shows a spinner
//! placeholder; once loaded it shows the contact's initials.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::avatar::AvatarState;
use crate::suggestion::{ContactInfo, SuggestionResult};
use crate::theme;

use super::header_lines;

/// Fixed card height: borders + header + blank + three avatar rows
pub const CONTACT_CARD_HEIGHT: u16 = 8;

pub fn render_contact_card(
    frame: &mut Frame,
    area: Rect,
    suggestion: &SuggestionResult,
    contact: &ContactInfo,
    avatar: &AvatarState,
    spinner: &str,
    reveal: f32,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contact ")
        .border_style(Style::default().fg(theme::faded(theme::card::BORDER, reveal)));

    let [title, date] = header_lines(suggestion, reveal);

    let mut lines = vec![title, date, Line::from("")];
    lines.extend(avatar_rows(contact, avatar, spinner, reveal));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The three-line avatar circle, with the display name beside the middle row.
fn avatar_rows(
    contact: &ContactInfo,
    avatar: &AvatarState,
    spinner: &str,
    reveal: f32,
) -> Vec<Line<'static>> {
    let placeholder = avatar.is_placeholder();

    let ring_color = if placeholder {
        theme::card::PLACEHOLDER
    } else {
        theme::card::AVATAR
    };
    let ring = Style::default().fg(theme::faded(ring_color, reveal));

    let center = if placeholder {
        Span::styled(
            format!("{spinner:^4}"),
            Style::default().fg(theme::faded(theme::card::PLACEHOLDER, reveal)),
        )
    } else {
        Span::styled(
            format!("{:^4}", initials(&contact.display_name)),
            Style::default()
                .fg(theme::faded(theme::card::AVATAR, reveal))
                .add_modifier(Modifier::BOLD),
        )
    };

    let name = Span::styled(
        contact.display_name.clone(),
        Style::default()
            .fg(theme::faded(theme::card::NAME, reveal))
            .add_modifier(Modifier::BOLD),
    );

    vec![
        Line::from(Span::styled("  ╭────╮", ring)),
        Line::from(vec![
            Span::styled("  │", ring),
            center,
            Span::styled("│  ", ring),
            name,
        ]),
        Line::from(Span::styled("  ╰────╯", ring)),
    ]
}

/// Up to two uppercase initials from the display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod contact_tests;
