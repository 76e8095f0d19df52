//! Search-filtered view state over an aggregated mission list.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::MissionRecord;

/// Message shown when a filter computation fails unexpectedly.
const SEARCH_ERROR: &str = "Error when searching missions";

/// View state: the immutable full list plus the derived displayed subset.
///
/// The displayed list is always recomputed from the full list, never from the
/// previous displayed list, so filtering is relative to the full set. An
/// empty query displays nothing — the initial view before any typing is also
/// empty.
#[derive(Debug)]
pub struct FilterView {
    full_list: Vec<MissionRecord>,
    displayed: Vec<MissionRecord>,
    is_searching: bool,
    error_message: Option<String>,
}

impl FilterView {
    /// Wrap an aggregated list. Nothing is displayed until a search arrives.
    pub fn new(full_list: Vec<MissionRecord>) -> Self {
        Self {
            full_list,
            displayed: Vec::new(),
            is_searching: false,
            error_message: None,
        }
    }

    /// Recompute the displayed list for a new search text.
    ///
    /// Empty text clears the display rather than matching everything. A panic
    /// inside the match computation is reported as a generic search error and
    /// leaves the display as it was at the point of failure.
    pub fn on_search_change(&mut self, text: &str) {
        self.is_searching = true;
        self.displayed.clear();

        if text.is_empty() {
            self.is_searching = false;
            return;
        }

        match catch_unwind(AssertUnwindSafe(|| matching(&self.full_list, text))) {
            Ok(matches) => self.displayed = matches,
            Err(_) => self.error_message = Some(SEARCH_ERROR.to_string()),
        }
        self.is_searching = false;
    }

    /// Records currently shown.
    pub fn displayed(&self) -> &[MissionRecord] {
        &self.displayed
    }

    /// Size of the aggregated list.
    pub fn total(&self) -> usize {
        self.full_list.len()
    }

    /// True while a filter computation is in flight.
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Case-insensitive substring match on mission name, preserving list order.
fn matching(records: &[MissionRecord], text: &str) -> Vec<MissionRecord> {
    let needle = text.to_lowercase();
    records
        .iter()
        .filter(|record| record.mission_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
