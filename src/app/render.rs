use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::cards::contact::{CONTACT_CARD_HEIGHT, render_contact_card};
use crate::cards::location::{LOCATION_CARD_MAX_HEIGHT, render_location_card};
use crate::picker;
use crate::theme;
use crate::widgets::popup;

use super::state::App;

impl App {
    /// Render the whole screen
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Screen title
            Constraint::Min(0),    // Cards
            Constraint::Length(3), // Picker trigger
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);
        self.render_cards(frame, layout[1]);
        self.render_trigger(frame, layout[2]);
        self.render_hints(frame, layout[3]);

        // The popup draws over everything else
        if self.picker.visible {
            picker::render_popup(&self.picker, frame);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(Span::styled(
            " Journal Suggestion ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), area);
    }

    /// Render whichever cards have data; both fade in together during the
    /// reveal transition.
    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let show_contact = self.journal.shows_contact_card();
        let coordinate = if self.journal.shows_location_card() {
            self.journal.location_coordinate()
        } else {
            None
        };

        if !show_contact && coordinate.is_none() {
            self.render_empty_state(frame, area);
            return;
        }

        let mut constraints = Vec::new();
        if show_contact {
            constraints.push(Constraint::Length(CONTACT_CARD_HEIGHT));
        }
        if coordinate.is_some() {
            constraints.push(Constraint::Max(LOCATION_CARD_MAX_HEIGHT));
        }
        constraints.push(Constraint::Min(0)); // Filler below the cards
        let layout = Layout::vertical(constraints).split(area);

        let alpha = self.reveal.alpha();
        let mut next_slot = 0;

        if show_contact {
            // Visibility already guarantees both records exist
            if let (Some(suggestion), Some(contact)) =
                (&self.journal.suggestion, &self.journal.contact)
            {
                render_contact_card(
                    frame,
                    layout[next_slot],
                    suggestion,
                    contact,
                    &self.avatar,
                    self.spinner_frame(),
                    alpha,
                );
            }
            next_slot += 1;
        }

        if let Some(coordinate) = coordinate {
            if let Some(suggestion) = &self.journal.suggestion {
                render_location_card(frame, layout[next_slot], suggestion, coordinate, alpha);
            }
        }
    }

    fn render_empty_state(&self, frame: &mut Frame, area: Rect) {
        let inner = popup::inset_rect(area, 2, area.height / 3);
        let lines = vec![
            Line::from(Span::styled(
                "No suggestion selected yet",
                Style::default()
                    .fg(theme::EMPTY_STATE)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                "Activate the picker below to browse journaling suggestions",
                Style::default().fg(theme::EMPTY_STATE),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::trigger::BORDER));

        let label = if self.is_fetching() {
            Line::from(Span::styled(
                format!("{} Waiting for suggestions…", self.spinner_frame()),
                Style::default().fg(theme::trigger::BUSY),
            ))
        } else {
            Line::from(Span::styled(
                "Present Journaling Suggestion Picker",
                Style::default()
                    .fg(theme::trigger::LABEL)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        frame.render_widget(Paragraph::new(label.centered()).block(block), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.picker.visible {
            " ↑/↓ move · type to filter · enter pick · esc dismiss"
        } else {
            " enter/p pick a suggestion · q quit"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(theme::EMPTY_STATE))),
            area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
