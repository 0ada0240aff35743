//! Picker popup rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::cards::date_format;
use crate::suggestion::SuggestionPayload;
use crate::theme;
use crate::widgets::popup;

use super::state::{MAX_VISIBLE_SUGGESTIONS, PickerState};

const POPUP_WIDTH: u16 = 64;
const FILTER_LINE_HEIGHT: u16 = 1;

pub fn render_popup(picker: &PickerState, frame: &mut Frame) {
    let rows = picker
        .filtered_count()
        .clamp(1, MAX_VISIBLE_SUGGESTIONS) as u16;
    let height = rows + FILTER_LINE_HEIGHT + 2; // +2 borders

    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let title = format!(
        " Suggestions ({}/{}) ",
        picker.filtered_count(),
        picker.total_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::picker::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([
        Constraint::Min(1),                      // Suggestion list
        Constraint::Length(FILTER_LINE_HEIGHT),  // Filter line
    ])
    .split(inner);

    render_list(picker, frame, layout[0]);
    render_filter_line(picker, frame, layout[1]);
}

fn render_list(picker: &PickerState, frame: &mut Frame, area: Rect) {
    let max_text_width = (area.width as usize).saturating_sub(4);

    let lines: Vec<Line> = if picker.filtered_count() == 0 {
        let message = if picker.total_count() == 0 {
            "  No suggestions"
        } else {
            "  No matches"
        };
        vec![Line::from(Span::styled(
            message,
            Style::default().fg(theme::picker::NO_MATCHES),
        ))]
    } else {
        picker
            .visible_entries()
            .map(|(display_idx, entry)| {
                entry_line(entry, display_idx == picker.selected_index(), max_text_width)
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn entry_line(entry: &SuggestionPayload, selected: bool, max_text_width: usize) -> Line<'static> {
    let interval = entry.date_interval.as_ref();
    let weekday = date_format::day_of_week(interval);
    let date = date_format::format_date(interval);

    let detail = if weekday.is_empty() {
        String::new()
    } else {
        format!(" · {weekday} {date}")
    };

    let title_width = max_text_width.saturating_sub(detail.chars().count());
    let title = truncate_to_width(&entry.title, title_width);

    let (bar, base) = if selected {
        (
            Span::styled(
                "┃ ",
                Style::default()
                    .fg(theme::picker::ITEM_SELECTED_BAR)
                    .bg(theme::picker::ITEM_SELECTED_BG),
            ),
            Style::default().bg(theme::picker::ITEM_SELECTED_BG),
        )
    } else {
        (Span::raw("  "), Style::default())
    };

    Line::from(vec![
        bar,
        Span::styled(
            title,
            base.fg(theme::picker::ITEM).add_modifier(Modifier::BOLD),
        ),
        Span::styled(detail, base.fg(theme::picker::ITEM_DETAIL)),
    ])
}

fn render_filter_line(picker: &PickerState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " ❯ ",
            Style::default()
                .fg(theme::picker::FILTER_PROMPT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(picker.filter().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate to a display width (not a char count), appending an ellipsis
/// when anything was cut. Wide glyphs count for their full width.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut width = 0usize;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        // Keep one column for the ellipsis
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
