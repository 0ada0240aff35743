//! Shared helpers for unit tests.

pub mod fixtures {
    use crate::suggestion::{
        ContactInfo, Coordinate, DateInterval, LocationInfo, Selection, SuggestionItem,
        SuggestionPayload, SuggestionResult,
    };

    /// 2024-03-04 09:30 UTC, a Monday
    pub const MONDAY_MORNING: i64 = 1_709_544_600;

    pub fn monday_interval() -> DateInterval {
        DateInterval::from_timestamps(MONDAY_MORNING, MONDAY_MORNING + 3_600).unwrap()
    }

    pub fn contact(name: &str, photo_url: Option<&str>) -> ContactInfo {
        ContactInfo {
            photo_url: photo_url.map(str::to_string),
            display_name: name.to_string(),
        }
    }

    pub fn coordinate() -> Coordinate {
        Coordinate {
            latitude: 40.9830,
            longitude: 29.0291,
        }
    }

    pub fn payload_with_both(title: &str) -> SuggestionPayload {
        SuggestionPayload {
            title: title.to_string(),
            date_interval: Some(monday_interval()),
            items: vec![
                SuggestionItem::Contact(contact("Ada Lovelace", Some("https://example.com/a.png"))),
                SuggestionItem::Location(LocationInfo {
                    coordinate: Some(coordinate()),
                }),
            ],
        }
    }

    pub fn selection_with_both(title: &str) -> Selection {
        payload_with_both(title).resolve()
    }

    pub fn selection_contact_only(title: &str, name: &str, photo_url: Option<&str>) -> Selection {
        Selection {
            suggestion: SuggestionResult {
                title: title.to_string(),
                date_interval: Some(monday_interval()),
            },
            contact: Some(contact(name, photo_url)),
            location: None,
        }
    }

    pub fn selection_location_only(title: &str) -> Selection {
        Selection {
            suggestion: SuggestionResult {
                title: title.to_string(),
                date_interval: Some(monday_interval()),
            },
            contact: None,
            location: Some(LocationInfo {
                coordinate: Some(coordinate()),
            }),
        }
    }
}

pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::app::App;
    use crate::avatar::worker::{AvatarRequest, AvatarResponse};
    use crate::config::Config;
    use crate::suggestion::worker::{PickerRequest, PickerResponse};

    /// An [`App`] wired to channels the test holds the far ends of, so
    /// worker traffic can be observed and scripted without threads.
    pub struct TestHarness {
        pub app: App,
        pub picker_requests: Receiver<PickerRequest>,
        pub picker_responses: Sender<PickerResponse>,
        pub avatar_requests: Receiver<AvatarRequest>,
        pub avatar_responses: Sender<AvatarResponse>,
    }

    pub fn test_app() -> TestHarness {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> TestHarness {
        let (picker_tx, picker_requests) = mpsc::channel();
        let (picker_responses, picker_rx) = mpsc::channel();
        let (avatar_tx, avatar_requests) = mpsc::channel();
        let (avatar_responses, avatar_rx) = mpsc::channel();

        TestHarness {
            app: App::with_channels(config, picker_tx, picker_rx, avatar_tx, avatar_rx),
            picker_requests,
            picker_responses,
            avatar_requests,
            avatar_responses,
        }
    }
}
