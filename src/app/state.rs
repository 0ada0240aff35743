use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::avatar::loader::ImageLoader;
use crate::avatar::worker::{AvatarRequest, AvatarResponse, spawn_worker as spawn_avatar_worker};
use crate::avatar::{AvatarState, SPINNER_FRAMES};
use crate::config::Config;
use crate::picker::PickerState;
use crate::suggestion::provider::SuggestionProvider;
use crate::suggestion::worker::{
    PickerRequest, PickerResponse, spawn_worker as spawn_picker_worker,
};
use crate::suggestion::{ContactInfo, Coordinate, LocationInfo, Selection, SuggestionResult};

/// How long the card reveal transition runs
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);

/// The three records shown on screen, owned by the top-level app.
///
/// They are written by exactly one path, [`JournalState::apply`], which
/// replaces all three wholesale. There is no merging and no history.
#[derive(Debug, Default)]
pub struct JournalState {
    pub suggestion: Option<SuggestionResult>,
    pub contact: Option<ContactInfo>,
    pub location: Option<LocationInfo>,
}

impl JournalState {
    /// Replace the on-screen records with a fresh picker completion.
    pub fn apply(&mut self, selection: Selection) {
        self.suggestion = Some(selection.suggestion);
        self.contact = selection.contact;
        self.location = selection.location;
    }

    /// Contact card shows iff both the result and a contact are present.
    pub fn shows_contact_card(&self) -> bool {
        self.suggestion.is_some() && self.contact.is_some()
    }

    /// Location card shows iff the result, a location AND its coordinate
    /// are all present.
    pub fn shows_location_card(&self) -> bool {
        self.suggestion.is_some() && self.location_coordinate().is_some()
    }

    pub fn location_coordinate(&self) -> Option<Coordinate> {
        self.location.as_ref().and_then(|location| location.coordinate)
    }
}

/// Ease-in-out curve over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Card fade-in transition started by each picker completion.
#[derive(Debug, Default)]
pub struct RevealState {
    started: Option<Instant>,
}

impl RevealState {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Eased progress in `[0, 1]`; `1.0` when no transition is running.
    pub fn alpha(&self) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                let t = started.elapsed().as_secs_f32() / REVEAL_DURATION.as_secs_f32();
                if t >= 1.0 { 1.0 } else { ease_in_out(t) }
            }
        }
    }
}

/// Application state
pub struct App {
    pub journal: JournalState,
    pub picker: PickerState,
    pub avatar: AvatarState,
    pub reveal: RevealState,
    pub should_quit: bool,

    animation_enabled: bool,
    avatars_enabled: bool,

    /// UI tick counter driving spinner frames
    tick: u64,

    /// Ids the app is still waiting on; anything else is stale and dropped
    pub(crate) pending_fetch: Option<u64>,
    pub(crate) pending_resolve: Option<u64>,
    next_request_id: u64,

    pub(crate) picker_tx: Sender<PickerRequest>,
    pub(crate) picker_rx: Receiver<PickerResponse>,
    pub(crate) avatar_tx: Sender<AvatarRequest>,
    pub(crate) avatar_rx: Receiver<AvatarResponse>,

    /// Token for the in-flight avatar fetch; cancelled when its card is
    /// replaced
    avatar_cancel: Option<CancellationToken>,
}

impl App {
    /// Create the app and spawn its worker threads.
    pub fn new(
        config: &Config,
        provider: Box<dyn SuggestionProvider>,
        loader: Box<dyn ImageLoader>,
    ) -> Self {
        let (picker_tx, picker_request_rx) = mpsc::channel();
        let (picker_response_tx, picker_rx) = mpsc::channel();
        spawn_picker_worker(provider, picker_request_rx, picker_response_tx);

        let (avatar_tx, avatar_request_rx) = mpsc::channel();
        let (avatar_response_tx, avatar_rx) = mpsc::channel();
        spawn_avatar_worker(loader, avatar_request_rx, avatar_response_tx);

        Self::with_channels(config, picker_tx, picker_rx, avatar_tx, avatar_rx)
    }

    /// Wire the app onto existing channels. Tests hold the worker-side
    /// ends and script responses by hand.
    pub(crate) fn with_channels(
        config: &Config,
        picker_tx: Sender<PickerRequest>,
        picker_rx: Receiver<PickerResponse>,
        avatar_tx: Sender<AvatarRequest>,
        avatar_rx: Receiver<AvatarResponse>,
    ) -> Self {
        Self {
            journal: JournalState::default(),
            picker: PickerState::new(),
            avatar: AvatarState::default(),
            reveal: RevealState::default(),
            should_quit: false,
            animation_enabled: config.ui.animation,
            avatars_enabled: config.ui.avatars,
            tick: 0,
            pending_fetch: None,
            pending_resolve: None,
            next_request_id: 0,
            picker_tx,
            picker_rx,
            avatar_tx,
            avatar_rx,
            avatar_cancel: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// A catalog fetch is in flight (trigger shows its busy spinner).
    pub fn is_fetching(&self) -> bool {
        self.pending_fetch.is_some()
    }

    pub(crate) fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Current placeholder spinner glyph.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()]
    }

    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Activate the picker trigger: ask the provider for suggestions.
    ///
    /// Ignored while the picker is already open or a fetch is in flight.
    pub fn activate_trigger(&mut self) {
        if self.picker.visible || self.pending_fetch.is_some() {
            return;
        }

        let request_id = self.next_request_id();
        self.pending_fetch = Some(request_id);
        let _ = self.picker_tx.send(PickerRequest::Fetch { request_id });
    }

    /// Hand a picked payload to the worker for content extraction.
    pub(crate) fn resolve_payload(&mut self, payload: crate::suggestion::SuggestionPayload) {
        let request_id = self.next_request_id();
        self.pending_resolve = Some(request_id);
        let _ = self.picker_tx.send(PickerRequest::Resolve {
            payload,
            request_id,
        });
    }

    /// Apply one picker completion: replace all three records together,
    /// restart the reveal transition and kick off the avatar fetch.
    pub fn apply_selection(&mut self, selection: Selection) {
        // The previous card is going away; abandon its pending load
        if let Some(token) = self.avatar_cancel.take() {
            token.cancel();
        }
        self.avatar = AvatarState::Idle;

        self.journal.apply(selection);

        if self.avatars_enabled {
            self.request_avatar();
        }

        if self.animation_enabled {
            self.reveal.start();
        }
    }

    fn request_avatar(&mut self) {
        let Some(url) = self
            .journal
            .contact
            .as_ref()
            .and_then(|contact| contact.photo_url.clone())
        else {
            // No URL: the placeholder spins indefinitely
            return;
        };

        let request_id = self.next_request_id();
        let cancel = CancellationToken::new();
        self.avatar = AvatarState::Loading { request_id };
        self.avatar_cancel = Some(cancel.clone());
        let _ = self.avatar_tx.send(AvatarRequest::Load {
            url,
            request_id,
            cancel,
        });
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
