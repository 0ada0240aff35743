//! Tests for location card rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::suggestion::DateInterval;

const TEST_WIDTH: u16 = 60;

fn sample_suggestion() -> SuggestionResult {
    SuggestionResult {
        title: "Morning walk in Kadıköy".to_string(),
        // 2024-03-09 07:15 UTC, a Saturday
        date_interval: DateInterval::from_timestamps(1_709_968_500, 1_709_971_200),
    }
}

fn render(suggestion: &SuggestionResult, coordinate: Coordinate, height: u16) -> String {
    let backend = TestBackend::new(TEST_WIDTH, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_location_card(frame, area, suggestion, coordinate, 1.0);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_renders_title_and_date() {
    let coordinate = Coordinate {
        latitude: 40.9830,
        longitude: 29.0291,
    };
    let output = render(&sample_suggestion(), coordinate, LOCATION_CARD_MAX_HEIGHT);

    assert!(output.contains("Morning walk in Kadıköy"));
    assert!(output.contains("Saturday"));
    assert!(output.contains("March 9"));
}

#[test]
fn test_renders_center_marker_and_caption() {
    let coordinate = Coordinate {
        latitude: 40.9830,
        longitude: 29.0291,
    };
    let output = render(&sample_suggestion(), coordinate, LOCATION_CARD_MAX_HEIGHT);

    assert!(output.contains('◆'));
    assert!(output.contains("40.9830°, 29.0291°"));
}

#[test]
fn test_absent_interval_renders_blank_date_line() {
    let suggestion = SuggestionResult {
        title: "Somewhere".to_string(),
        date_interval: None,
    };
    let coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };
    let output = render(&suggestion, coordinate, LOCATION_CARD_MAX_HEIGHT);

    assert!(output.contains("Somewhere"));
    assert!(!output.contains("Saturday"));
}

#[test]
fn test_survives_small_area() {
    // Height below the cap: the map shrinks, the card still renders
    let coordinate = Coordinate {
        latitude: -33.8568,
        longitude: 151.2153,
    };
    let output = render(&sample_suggestion(), coordinate, 8);

    assert!(output.contains("Morning walk"));
}
