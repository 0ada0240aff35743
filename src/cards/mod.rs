//! Card views for a picked suggestion
//!
//! Both cards are stateless functions of their inputs: a title line, a
//! weekday+date line, and one kind-specific row (avatar+name, or an
//! embedded map). Visibility is decided by the caller, not in here.

pub mod contact;
pub mod date_format;
pub mod location;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::suggestion::SuggestionResult;
use crate::theme;

/// Title and weekday+date lines shared by both cards.
///
/// An absent interval yields empty label strings, so the date line simply
/// renders blank.
pub(crate) fn header_lines(suggestion: &SuggestionResult, reveal: f32) -> [Line<'static>; 2] {
    let interval = suggestion.date_interval.as_ref();

    let title = Line::from(Span::styled(
        suggestion.title.clone(),
        Style::default()
            .fg(theme::faded(theme::card::TITLE, reveal))
            .add_modifier(Modifier::BOLD),
    ));

    let date = Line::from(vec![
        Span::styled(
            date_format::day_of_week(interval),
            Style::default()
                .fg(theme::faded(theme::card::WEEKDAY, reveal))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            date_format::format_date(interval),
            Style::default().fg(theme::faded(theme::card::DATE, reveal)),
        ),
    ]);

    [title, date]
}
