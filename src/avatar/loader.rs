//! Image loading abstraction
//!
//! Fetching avatar bytes is a host capability: the UI only needs "bytes or
//! failure, cancellable". The production loader drives reqwest on a
//! current-thread tokio runtime owned by the avatar worker; tests use a
//! scripted double.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors from an image load attempt
#[derive(Debug, Error)]
pub enum ImageError {
    /// The URL could not be fetched (bad URL, network, HTTP status)
    #[error("image fetch failed: {0}")]
    Fetch(String),

    /// The server answered with an empty body
    #[error("image response was empty")]
    Empty,

    /// The load was abandoned because its card was replaced
    #[error("image load cancelled")]
    Cancelled,
}

/// Asynchronously yields image bytes for a URL, or signals failure.
pub trait ImageLoader: Send {
    fn load(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>, ImageError>;
}

/// HTTP loader backed by reqwest.
pub struct HttpImageLoader {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            client: reqwest::Client::new(),
        })
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>, ImageError> {
        self.runtime.block_on(async {
            tokio::select! {
                _ = cancel.cancelled() => Err(ImageError::Cancelled),
                result = fetch(&self.client, url) => result,
            }
        })
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, ImageError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| ImageError::Fetch(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ImageError::Fetch(e.to_string()))?;

    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    Ok(bytes.to_vec())
}

/// Scripted loader for tests.
#[cfg(test)]
pub struct MockImageLoader {
    outcome: Result<Vec<u8>, String>,
}

#[cfg(test)]
impl MockImageLoader {
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { outcome: Ok(bytes) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[cfg(test)]
impl ImageLoader for MockImageLoader {
    fn load(&self, _url: &str, cancel: &CancellationToken) -> Result<Vec<u8>, ImageError> {
        if cancel.is_cancelled() {
            return Err(ImageError::Cancelled);
        }
        match &self.outcome {
            Ok(bytes) if bytes.is_empty() => Err(ImageError::Empty),
            Ok(bytes) => Ok(bytes.clone()),
            Err(message) => Err(ImageError::Fetch(message.clone())),
        }
    }
}
