//! Picker popup state
//!
//! The modal list the user browses after activating the trigger. Holds the
//! fetched payloads, the fuzzy filter and the selection cursor. Selection
//! indices always point into the filtered view.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::suggestion::SuggestionPayload;

/// Rows shown at once before the list clips
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

pub struct PickerState {
    pub visible: bool,
    entries: Vec<SuggestionPayload>,
    filtered: Vec<usize>,
    selected: usize,
    /// First filtered row in the rendered window; follows the cursor
    offset: usize,
    filter: String,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerState")
            .field("visible", &self.visible)
            .field("entries", &self.entries.len())
            .field("filtered", &self.filtered.len())
            .field("selected", &self.selected)
            .field("offset", &self.offset)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            visible: false,
            entries: Vec::new(),
            filtered: Vec::new(),
            selected: 0,
            offset: 0,
            filter: String::new(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Open the popup over a freshly fetched catalog.
    pub fn open_with(&mut self, entries: Vec<SuggestionPayload>) {
        self.entries = entries;
        self.filter.clear();
        self.refilter();
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Entries in the rendered window, paired with their position in the
    /// filtered view. The window scrolls so the cursor is always inside it.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &SuggestionPayload)> {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(MAX_VISIBLE_SUGGESTIONS)
            .filter_map(|(display_idx, &entry_idx)| {
                self.entries.get(entry_idx).map(|entry| (display_idx, entry))
            })
    }

    /// The payload under the cursor, if any row matches the filter.
    pub fn selected_payload(&self) -> Option<&SuggestionPayload> {
        self.filtered
            .get(self.selected)
            .and_then(|&entry_idx| self.entries.get(entry_idx))
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn move_down(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1).min(self.filtered.len() - 1);
        }
        if self.selected >= self.offset + MAX_VISIBLE_SUGGESTIONS {
            self.offset = self.selected + 1 - MAX_VISIBLE_SUGGESTIONS;
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.refilter();
    }

    /// Re-score entries against the filter. Space-separated terms must all
    /// match (fzf-style AND), higher combined score sorts first.
    fn refilter(&mut self) {
        self.selected = 0;
        self.offset = 0;

        let terms: Vec<&str> = self.filter.split_whitespace().collect();
        if terms.is_empty() {
            self.filtered = (0..self.entries.len()).collect();
            return;
        }

        let mut scored: Vec<(usize, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let haystack = entry.search_text();
                let mut total: i64 = 0;
                for term in &terms {
                    total += self.matcher.fuzzy_match(&haystack, term)?;
                }
                Some((idx, total))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered = scored.into_iter().map(|(idx, _)| idx).collect();
    }
}
