//! Journaling suggestions: data model, catalog source, provider
//! abstraction and the worker thread that runs it off the UI loop.

pub mod catalog;
pub mod provider;
pub mod types;
pub mod worker;

pub use types::{
    ContactInfo, Coordinate, DateInterval, LocationInfo, Selection, SuggestionItem,
    SuggestionPayload, SuggestionResult,
};
