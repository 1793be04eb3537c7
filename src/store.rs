//! Holds the full result set of the latest search and the subset currently
//! on display.

use serde::Serialize;
use tracing::{debug, info};

use crate::filter::{self, FilterCriteria};
use crate::model::FlightOffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchState {
    Idle,
    Searching,
    Loaded,
}

/// Issued by [`ResultStore::begin_search`]; only the most recent ticket can
/// commit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultStore {
    state: SearchState,
    #[serde(skip)]
    generation: u64,
    progress: u8,
    all: Vec<FlightOffer>,
    displayed: Vec<FlightOffer>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            generation: 0,
            progress: 0,
            all: Vec::new(),
            displayed: Vec::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn all(&self) -> &[FlightOffer] {
        &self.all
    }

    pub fn displayed(&self) -> &[FlightOffer] {
        &self.displayed
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn progress_visible(&self) -> bool {
        self.state == SearchState::Searching
    }

    /// Enters `Searching`. Calling this again mid-search restarts the
    /// transition and invalidates every earlier ticket.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        if self.state == SearchState::Searching {
            debug!(generation = self.generation, "search restarted");
        }
        self.state = SearchState::Searching;
        self.progress = 0;
        info!(generation = self.generation, "search started");
        SearchTicket {
            generation: self.generation,
        }
    }

    pub fn advance_progress(&mut self, step: u8) -> u8 {
        if self.state == SearchState::Searching {
            self.progress = self.progress.saturating_add(step).min(100);
        }
        self.progress
    }

    /// Commits `offers` if `ticket` belongs to the latest search. The
    /// displayed list resets to the full list; filters are not carried over.
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn complete(&mut self, ticket: SearchTicket, offers: Vec<FlightOffer>) -> bool {
        if ticket.generation != self.generation || self.state != SearchState::Searching {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded search result"
            );
            return false;
        }

        info!(generation = ticket.generation, offers = offers.len(), "search committed");
        self.displayed = offers.clone();
        self.all = offers;
        self.state = SearchState::Loaded;
        self.progress = 100;
        true
    }

    pub fn apply_filter(&mut self, criteria: &FilterCriteria) -> &[FlightOffer] {
        self.displayed = filter::reconcile(&self.all, criteria);
        &self.displayed
    }

    pub fn reset_filters(&mut self) -> &[FlightOffer] {
        self.displayed = self.all.clone();
        &self.displayed
    }
}
