//! Suggestion catalog loading
//!
//! The picker is fed from a catalog of payloads: either the built-in sample
//! set or a user-supplied JSON file. Timestamps in the file are unix
//! seconds; `start`/`end` travel together and are dropped as a pair when
//! either is missing or out of range.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::MemoirError;
use super::types::{
    ContactInfo, Coordinate, DateInterval, LocationInfo, SuggestionItem, SuggestionPayload,
};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    suggestions: Vec<RawSuggestion>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    title: String,
    #[serde(default)]
    start: Option<i64>,
    #[serde(default)]
    end: Option<i64>,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawItem {
    Contact {
        name: String,
        #[serde(default)]
        photo_url: Option<String>,
    },
    Location {
        #[serde(default)]
        latitude: Option<f64>,
        #[serde(default)]
        longitude: Option<f64>,
    },
}

impl RawSuggestion {
    fn into_payload(self) -> SuggestionPayload {
        let date_interval = match (self.start, self.end) {
            (Some(start), Some(end)) => DateInterval::from_timestamps(start, end),
            _ => None,
        };

        let items = self
            .items
            .into_iter()
            .map(|item| match item {
                RawItem::Contact { name, photo_url } => SuggestionItem::Contact(ContactInfo {
                    photo_url,
                    display_name: name,
                }),
                RawItem::Location {
                    latitude,
                    longitude,
                } => SuggestionItem::Location(LocationInfo {
                    // A location needs both halves of the coordinate
                    coordinate: latitude.zip(longitude).map(|(latitude, longitude)| {
                        Coordinate {
                            latitude,
                            longitude,
                        }
                    }),
                }),
            })
            .collect();

        SuggestionPayload {
            title: self.title,
            date_interval,
            items,
        }
    }
}

/// Parse a catalog from JSON text.
pub fn parse(json: &str) -> Result<Vec<SuggestionPayload>, serde_json::Error> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    Ok(raw
        .suggestions
        .into_iter()
        .map(RawSuggestion::into_payload)
        .collect())
}

/// Load a catalog file from disk.
pub fn load_file(path: &Path) -> Result<Vec<SuggestionPayload>, MemoirError> {
    if !path.exists() {
        return Err(MemoirError::CatalogNotFound(path.to_path_buf()));
    }

    let json = fs::read_to_string(path)?;
    let payloads = parse(&json).map_err(|e| MemoirError::CatalogParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    log::debug!("loaded {} suggestions from {}", payloads.len(), path.display());
    Ok(payloads)
}

/// Built-in sample catalog used when no file is configured.
///
/// Covers the shapes the cards have to handle: contact-only,
/// location-only, both at once, and a suggestion without a date interval.
pub fn builtin() -> Vec<SuggestionPayload> {
    vec![
        SuggestionPayload {
            title: "Coffee with Ada".to_string(),
            // 2024-03-04 09:30 - 10:30 UTC
            date_interval: DateInterval::from_timestamps(1_709_544_600, 1_709_548_200),
            items: vec![SuggestionItem::Contact(ContactInfo {
                photo_url: Some("https://i.pravatar.cc/150?img=5".to_string()),
                display_name: "Ada Lovelace".to_string(),
            })],
        },
        SuggestionPayload {
            title: "Morning walk in Kadıköy".to_string(),
            // 2024-03-09 07:15 - 08:00 UTC
            date_interval: DateInterval::from_timestamps(1_709_968_500, 1_709_971_200),
            items: vec![SuggestionItem::Location(LocationInfo {
                coordinate: Some(Coordinate {
                    latitude: 40.9830,
                    longitude: 29.0291,
                }),
            })],
        },
        SuggestionPayload {
            title: "Dinner with Grace at the harbor".to_string(),
            // 2024-03-15 18:00 - 21:00 UTC
            date_interval: DateInterval::from_timestamps(1_710_525_600, 1_710_536_400),
            items: vec![
                SuggestionItem::Contact(ContactInfo {
                    photo_url: None,
                    display_name: "Grace Hopper".to_string(),
                }),
                SuggestionItem::Location(LocationInfo {
                    coordinate: Some(Coordinate {
                        latitude: 41.0423,
                        longitude: 29.0067,
                    }),
                }),
            ],
        },
        SuggestionPayload {
            title: "A quiet afternoon".to_string(),
            date_interval: None,
            items: Vec::new(),
        },
        SuggestionPayload {
            title: "Somewhere, once".to_string(),
            // 2024-04-01 12:00 - 12:30 UTC; the visit never resolved to a place
            date_interval: DateInterval::from_timestamps(1_711_972_800, 1_711_974_600),
            items: vec![SuggestionItem::Location(LocationInfo { coordinate: None })],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "suggestions": [
            {
                "title": "Tea with Mary",
                "start": 1709544600,
                "end": 1709548200,
                "items": [
                    { "type": "contact", "name": "Mary Shelley", "photo_url": "https://example.com/mary.png" },
                    { "type": "location", "latitude": 51.5, "longitude": -0.12 }
                ]
            },
            { "title": "Untimed" }
        ]
    }"#;

    #[test]
    fn test_parse_full_suggestion() {
        let payloads = parse(SAMPLE_JSON).unwrap();
        assert_eq!(payloads.len(), 2);

        let first = &payloads[0];
        assert_eq!(first.title, "Tea with Mary");
        assert!(first.date_interval.is_some());
        assert_eq!(first.first_contact().unwrap().display_name, "Mary Shelley");
        assert_eq!(
            first.first_location().unwrap().coordinate.unwrap().latitude,
            51.5
        );
    }

    #[test]
    fn test_parse_suggestion_without_interval_or_items() {
        let payloads = parse(SAMPLE_JSON).unwrap();
        let untimed = &payloads[1];
        assert!(untimed.date_interval.is_none());
        assert!(untimed.items.is_empty());
    }

    #[test]
    fn test_parse_drops_half_open_interval() {
        let json = r#"{ "suggestions": [ { "title": "Half", "start": 1709544600 } ] }"#;
        let payloads = parse(json).unwrap();
        assert!(payloads[0].date_interval.is_none());
    }

    #[test]
    fn test_parse_location_without_coordinate() {
        let json = r#"{ "suggestions": [
            { "title": "Lost place", "items": [ { "type": "location" } ] }
        ] }"#;
        let payloads = parse(json).unwrap();
        let location = payloads[0].first_location().unwrap();
        assert!(location.coordinate.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse("{ not json").is_err());
        assert!(parse(r#"{ "suggestions": [ { "no_title": true } ] }"#).is_err());
    }

    #[test]
    fn test_load_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

        let payloads = load_file(file.path()).unwrap();
        assert_eq!(payloads.len(), 2);
    }

    #[test]
    fn test_load_file_missing_path() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, MemoirError::CatalogNotFound(_)));
    }

    #[test]
    fn test_load_file_malformed_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[[").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, MemoirError::CatalogParse { .. }));
    }

    #[test]
    fn test_builtin_covers_card_shapes() {
        let payloads = builtin();
        assert!(!payloads.is_empty());

        // At least one contact-bearing, one location-bearing and one
        // untimed suggestion, so the demo exercises every card path.
        assert!(payloads.iter().any(|p| p.first_contact().is_some()));
        assert!(payloads.iter().any(|p| {
            p.first_location()
                .is_some_and(|l| l.coordinate.is_some())
        }));
        assert!(payloads.iter().any(|p| p.date_interval.is_none()));
        assert!(payloads.iter().any(|p| {
            p.first_location()
                .is_some_and(|l| l.coordinate.is_none())
        }));
    }
}
