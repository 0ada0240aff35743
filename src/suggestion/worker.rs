//! Picker worker thread
//!
//! Runs the suggestion provider off the UI thread. The UI sends a request
//! per picker interaction; the worker answers on the response channel and
//! the UI drains it on its tick. Responses carry the request id they
//! answer, and the UI drops any id it is no longer waiting for, so a
//! superseded interaction can never mutate state.

use std::sync::mpsc::{Receiver, Sender};

use super::provider::SuggestionProvider;
use super::types::{Selection, SuggestionPayload};

/// Requests from the UI thread to the picker worker
#[derive(Debug)]
pub enum PickerRequest {
    /// Ask the provider for the current suggestion payloads
    Fetch { request_id: u64 },
    /// Run the content lookups on a picked payload
    Resolve {
        payload: SuggestionPayload,
        request_id: u64,
    },
}

/// Responses from the picker worker to the UI thread
#[derive(Debug)]
pub enum PickerResponse {
    Catalog {
        payloads: Vec<SuggestionPayload>,
        request_id: u64,
    },
    Resolved {
        selection: Selection,
        request_id: u64,
    },
    /// Provider failure; the UI returns the trigger to idle and shows
    /// nothing (prior cards stay untouched)
    Error { request_id: u64 },
}

/// Spawn the picker worker thread.
///
/// The thread exits when the request channel closes.
pub fn spawn_worker(
    provider: Box<dyn SuggestionProvider>,
    request_rx: Receiver<PickerRequest>,
    response_tx: Sender<PickerResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(provider, request_rx, response_tx);
    });
}

fn worker_loop(
    provider: Box<dyn SuggestionProvider>,
    request_rx: Receiver<PickerRequest>,
    response_tx: Sender<PickerResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            PickerRequest::Fetch { request_id } => match provider.fetch() {
                Ok(payloads) => PickerResponse::Catalog {
                    payloads,
                    request_id,
                },
                Err(e) => {
                    log::debug!("provider fetch failed: {e}");
                    PickerResponse::Error { request_id }
                }
            },
            PickerRequest::Resolve {
                payload,
                request_id,
            } => PickerResponse::Resolved {
                selection: payload.resolve(),
                request_id,
            },
        };

        if response_tx.send(response).is_err() {
            // UI side is gone, nothing left to do
            break;
        }
    }

    log::debug!("picker worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
