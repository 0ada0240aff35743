//! Display-only records for journaling suggestions
//!
//! Everything here is transient: one [`Selection`] is produced per picker
//! completion and wholesale-replaces the previous one. Nothing is persisted.

use chrono::{DateTime, Utc};

/// The time span a suggestion covers.
///
/// Only the start instant participates in date formatting; the end instant
/// is carried for completeness but never rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateInterval {
    /// Build an interval from unix-second timestamps.
    ///
    /// Returns `None` when either timestamp is out of chrono's range.
    pub fn from_timestamps(start: i64, end: i64) -> Option<Self> {
        let start = DateTime::from_timestamp(start, 0)?;
        let end = DateTime::from_timestamp(end, 0)?;
        Some(Self { start, end })
    }
}

/// The top-level record extracted from a picked suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionResult {
    pub title: String,
    pub date_interval: Option<DateInterval>,
}

/// A contact the suggestion is about.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    /// Remote avatar URL; absent contacts render a placeholder instead.
    pub photo_url: Option<String>,
    pub display_name: String,
}

/// A geographic point, latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A place the suggestion is about.
///
/// The coordinate is itself optional: the host may know a visit happened
/// without resolving where. A location without a coordinate never produces
/// a location card.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub coordinate: Option<Coordinate>,
}

/// One typed item inside a suggestion payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionItem {
    Contact(ContactInfo),
    Location(LocationInfo),
}

/// The opaque payload handed back by the suggestion provider.
///
/// Content extraction is a typed-list lookup: the first item of the
/// requested kind wins, additional items of the same kind are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPayload {
    pub title: String,
    pub date_interval: Option<DateInterval>,
    pub items: Vec<SuggestionItem>,
}

impl SuggestionPayload {
    /// First contact-typed item, or `None` when the suggestion is not
    /// contact-related.
    pub fn first_contact(&self) -> Option<&ContactInfo> {
        self.items.iter().find_map(|item| match item {
            SuggestionItem::Contact(contact) => Some(contact),
            _ => None,
        })
    }

    /// First location-typed item, or `None`.
    pub fn first_location(&self) -> Option<&LocationInfo> {
        self.items.iter().find_map(|item| match item {
            SuggestionItem::Location(location) => Some(location),
            _ => None,
        })
    }

    /// Run both content lookups and bundle the results with the top-level
    /// record, so the caller can apply all three pieces of state at once.
    pub fn resolve(&self) -> Selection {
        Selection {
            suggestion: SuggestionResult {
                title: self.title.clone(),
                date_interval: self.date_interval,
            },
            contact: self.first_contact().cloned(),
            location: self.first_location().cloned(),
        }
    }

    /// Text the picker filter matches against.
    pub fn search_text(&self) -> String {
        match self.first_contact() {
            Some(contact) => format!("{} {}", self.title, contact.display_name),
            None => self.title.clone(),
        }
    }
}

/// The atomic triple produced by one picker completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub suggestion: SuggestionResult,
    pub contact: Option<ContactInfo>,
    pub location: Option<LocationInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> SuggestionItem {
        SuggestionItem::Contact(ContactInfo {
            photo_url: None,
            display_name: name.to_string(),
        })
    }

    fn location(latitude: f64, longitude: f64) -> SuggestionItem {
        SuggestionItem::Location(LocationInfo {
            coordinate: Some(Coordinate {
                latitude,
                longitude,
            }),
        })
    }

    #[test]
    fn test_interval_from_timestamps() {
        // 2024-03-04 09:30:00 UTC
        let interval = DateInterval::from_timestamps(1_709_544_600, 1_709_548_200).unwrap();
        assert_eq!(interval.start.timestamp(), 1_709_544_600);
        assert_eq!(interval.end.timestamp(), 1_709_548_200);
    }

    #[test]
    fn test_interval_rejects_out_of_range_timestamp() {
        assert!(DateInterval::from_timestamps(i64::MAX, 0).is_none());
        assert!(DateInterval::from_timestamps(0, i64::MIN).is_none());
    }

    #[test]
    fn test_first_contact_returns_first_match_only() {
        let payload = SuggestionPayload {
            title: "Lunch".to_string(),
            date_interval: None,
            items: vec![
                location(1.0, 2.0),
                contact("Ada"),
                contact("Grace"),
            ],
        };

        assert_eq!(payload.first_contact().unwrap().display_name, "Ada");
    }

    #[test]
    fn test_first_location_skips_contacts() {
        let payload = SuggestionPayload {
            title: "Walk".to_string(),
            date_interval: None,
            items: vec![contact("Ada"), location(41.0, 29.0), location(0.0, 0.0)],
        };

        let found = payload.first_location().unwrap();
        assert_eq!(found.coordinate.unwrap().latitude, 41.0);
    }

    #[test]
    fn test_lookups_absent_on_empty_payload() {
        let payload = SuggestionPayload {
            title: "Untyped".to_string(),
            date_interval: None,
            items: Vec::new(),
        };

        assert!(payload.first_contact().is_none());
        assert!(payload.first_location().is_none());
    }

    #[test]
    fn test_resolve_bundles_all_three_records() {
        let payload = SuggestionPayload {
            title: "Coffee".to_string(),
            date_interval: DateInterval::from_timestamps(1_709_544_600, 1_709_548_200),
            items: vec![contact("Ada"), location(51.5, -0.1)],
        };

        let selection = payload.resolve();
        assert_eq!(selection.suggestion.title, "Coffee");
        assert!(selection.suggestion.date_interval.is_some());
        assert_eq!(selection.contact.unwrap().display_name, "Ada");
        assert_eq!(
            selection.location.unwrap().coordinate.unwrap().longitude,
            -0.1
        );
    }

    #[test]
    fn test_resolve_keeps_absent_fields_absent() {
        let payload = SuggestionPayload {
            title: "Quiet day".to_string(),
            date_interval: None,
            items: Vec::new(),
        };

        let selection = payload.resolve();
        assert!(selection.suggestion.date_interval.is_none());
        assert!(selection.contact.is_none());
        assert!(selection.location.is_none());
    }

    #[test]
    fn test_search_text_includes_contact_name() {
        let payload = SuggestionPayload {
            title: "Lunch".to_string(),
            date_interval: None,
            items: vec![contact("Ada Lovelace")],
        };

        assert_eq!(payload.search_text(), "Lunch Ada Lovelace");
    }
}
