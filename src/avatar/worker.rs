//! Avatar worker thread
//!
//! Fetches avatar bytes off the UI thread. Each load request carries its
//! own cancellation token; the UI cancels the token directly when the card
//! is replaced, so an in-flight fetch aborts without a round trip through
//! the channel. Stale responses are additionally dropped by request id on
//! the UI side.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::loader::{ImageError, ImageLoader};

/// Requests from the UI thread to the avatar worker
#[derive(Debug)]
pub enum AvatarRequest {
    Load {
        url: String,
        request_id: u64,
        cancel: CancellationToken,
    },
}

/// Responses from the avatar worker to the UI thread
#[derive(Debug)]
pub enum AvatarResponse {
    Loaded { byte_len: usize, request_id: u64 },
    Failed { request_id: u64 },
}

/// Spawn the avatar worker thread.
///
/// The thread exits when the request channel closes.
pub fn spawn_worker(
    loader: Box<dyn ImageLoader>,
    request_rx: Receiver<AvatarRequest>,
    response_tx: Sender<AvatarResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(loader, request_rx, response_tx);
    });
}

fn worker_loop(
    loader: Box<dyn ImageLoader>,
    request_rx: Receiver<AvatarRequest>,
    response_tx: Sender<AvatarResponse>,
) {
    while let Ok(AvatarRequest::Load {
        url,
        request_id,
        cancel,
    }) = request_rx.recv()
    {
        let response = match loader.load(&url, &cancel) {
            Ok(bytes) => AvatarResponse::Loaded {
                byte_len: bytes.len(),
                request_id,
            },
            Err(ImageError::Cancelled) => {
                // The card this load belonged to is gone; nobody is waiting
                log::debug!("avatar load {request_id} cancelled");
                continue;
            }
            Err(e) => {
                log::debug!("avatar load {request_id} failed: {e}");
                AvatarResponse::Failed { request_id }
            }
        };

        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("avatar worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
