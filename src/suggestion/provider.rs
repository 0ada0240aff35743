//! Suggestion provider abstraction
//!
//! The suggestion ranking machinery is a host capability this application
//! does not implement. It is modeled as a trait so the UI only ever talks
//! to a polymorphic provider, and tests can swap in a scripted double.

use thiserror::Error;

use super::types::SuggestionPayload;

/// Errors the provider can surface
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not produce suggestions
    #[error("suggestion provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of journaling suggestion payloads.
///
/// `fetch` may take arbitrarily long on a real host; it runs on the picker
/// worker thread so the UI loop never blocks on it.
pub trait SuggestionProvider: Send {
    fn fetch(&self) -> Result<Vec<SuggestionPayload>, ProviderError>;
}

/// Production provider: serves a catalog loaded at startup.
pub struct CatalogProvider {
    payloads: Vec<SuggestionPayload>,
}

impl CatalogProvider {
    pub fn new(payloads: Vec<SuggestionPayload>) -> Self {
        Self { payloads }
    }
}

impl SuggestionProvider for CatalogProvider {
    fn fetch(&self) -> Result<Vec<SuggestionPayload>, ProviderError> {
        Ok(self.payloads.clone())
    }
}

/// Scripted provider for tests: returns a fixed payload list, an empty
/// list, or an error, depending on how it was built.
#[cfg(test)]
pub struct MockProvider {
    outcome: Result<Vec<SuggestionPayload>, String>,
}

#[cfg(test)]
impl MockProvider {
    pub fn with_payloads(payloads: Vec<SuggestionPayload>) -> Self {
        Self {
            outcome: Ok(payloads),
        }
    }

    pub fn empty() -> Self {
        Self {
            outcome: Ok(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[cfg(test)]
impl SuggestionProvider for MockProvider {
    fn fetch(&self) -> Result<Vec<SuggestionPayload>, ProviderError> {
        match &self.outcome {
            Ok(payloads) => Ok(payloads.clone()),
            Err(message) => Err(ProviderError::Unavailable(message.clone())),
        }
    }
}
