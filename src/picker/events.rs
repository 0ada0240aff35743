//! Key handling for the picker popup

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::suggestion::SuggestionPayload;

use super::state::PickerState;

/// What a key press did to the picker
#[derive(Debug, PartialEq)]
pub enum PickerOutcome {
    /// Popup consumed the key (navigation, filter edit)
    Handled,
    /// User dismissed the picker; a silent no-op for the rest of the app
    Dismissed,
    /// User picked this payload
    Selected(SuggestionPayload),
}

/// Handle one key press while the popup is visible.
///
/// `Dismissed` and `Selected` both close the popup; the caller decides
/// what (if anything) happens next.
pub fn handle_key(picker: &mut PickerState, key: KeyEvent) -> PickerOutcome {
    match key.code {
        KeyCode::Esc => {
            picker.close();
            PickerOutcome::Dismissed
        }
        KeyCode::Enter => match picker.selected_payload().cloned() {
            Some(payload) => {
                picker.close();
                PickerOutcome::Selected(payload)
            }
            // Nothing matches the filter; stay open
            None => PickerOutcome::Handled,
        },
        KeyCode::Up => {
            picker.move_up();
            PickerOutcome::Handled
        }
        KeyCode::Down => {
            picker.move_down();
            PickerOutcome::Handled
        }
        KeyCode::Backspace => {
            picker.pop_filter_char();
            PickerOutcome::Handled
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            picker.push_filter_char(c);
            PickerOutcome::Handled
        }
        _ => PickerOutcome::Handled,
    }
}
