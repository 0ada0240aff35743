//! Avatar lifecycle state
//!
//! One avatar load exists at a time, tied to the contact card currently on
//! screen. `Loading` and `Failed` render the same spinner placeholder on
//! purpose: a failed load degrades to "keep waiting", never to a distinct
//! broken-image state. A contact without a photo URL stays `Idle`, which is
//! also the placeholder.

/// Spinner glyphs cycled by the UI tick
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvatarState {
    /// No load requested (no contact on screen, or no photo URL)
    #[default]
    Idle,
    /// A fetch is in flight
    Loading { request_id: u64 },
    /// Bytes arrived; the card renders the filled avatar
    Loaded { byte_len: usize },
    /// The fetch failed; rendered identically to `Loading`
    Failed,
}

impl AvatarState {
    /// Whether the card should draw the spinner placeholder instead of the
    /// filled avatar.
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, AvatarState::Loaded { .. })
    }

    /// Id of the in-flight request, if any.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            AvatarState::Loading { request_id } => Some(*request_id),
            _ => None,
        }
    }
}
