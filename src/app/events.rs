use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::avatar::AvatarState;
use crate::avatar::worker::AvatarResponse;
use crate::picker::{self, PickerOutcome};
use crate::suggestion::worker::PickerResponse;

use super::state::App;

impl App {
    /// One event-loop turn: poll for input up to `timeout`, then drain
    /// worker responses and advance the tick.
    ///
    /// The poll timeout doubles as the animation/spinner tick, so the UI
    /// keeps redrawing while a fetch is pending even without input.
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                // Only key presses; release/repeat events would double-fire
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                _ => {}
            }
        }

        self.drain_responses();
        self.on_tick();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // The popup is modal while visible
        if self.picker.visible {
            match picker::handle_key(&mut self.picker, key) {
                PickerOutcome::Selected(payload) => self.resolve_payload(payload),
                // User cancellation: prior cards stay exactly as they were
                PickerOutcome::Dismissed => log::debug!("picker dismissed"),
                PickerOutcome::Handled => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Enter | KeyCode::Char('p') => self.activate_trigger(),
            _ => {}
        }
    }

    /// Drain worker responses without blocking. Responses for ids the app
    /// no longer waits on are dropped unprocessed.
    pub fn drain_responses(&mut self) {
        while let Ok(response) = self.picker_rx.try_recv() {
            self.handle_picker_response(response);
        }
        while let Ok(response) = self.avatar_rx.try_recv() {
            self.handle_avatar_response(response);
        }
    }

    fn handle_picker_response(&mut self, response: PickerResponse) {
        match response {
            PickerResponse::Catalog {
                payloads,
                request_id,
            } => {
                if self.pending_fetch.take_if(|id| *id == request_id).is_none() {
                    log::debug!("dropping stale catalog response {request_id}");
                    return;
                }
                self.picker.open_with(payloads);
            }
            PickerResponse::Resolved {
                selection,
                request_id,
            } => {
                if self
                    .pending_resolve
                    .take_if(|id| *id == request_id)
                    .is_none()
                {
                    log::debug!("dropping stale resolve response {request_id}");
                    return;
                }
                self.apply_selection(selection);
            }
            PickerResponse::Error { request_id } => {
                // Host-side failure: no retry, no error surface, prior
                // state untouched
                if self.pending_fetch == Some(request_id) {
                    self.pending_fetch = None;
                }
                if self.pending_resolve == Some(request_id) {
                    self.pending_resolve = None;
                }
            }
        }
    }

    fn handle_avatar_response(&mut self, response: AvatarResponse) {
        match response {
            AvatarResponse::Loaded {
                byte_len,
                request_id,
            } => {
                if self.avatar.request_id() == Some(request_id) {
                    self.avatar = AvatarState::Loaded { byte_len };
                } else {
                    log::debug!("dropping stale avatar response {request_id}");
                }
            }
            AvatarResponse::Failed { request_id } => {
                if self.avatar.request_id() == Some(request_id) {
                    self.avatar = AvatarState::Failed;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
