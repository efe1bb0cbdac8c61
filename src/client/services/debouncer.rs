//! Input debouncing for the search box.
//!
//! Each keystroke bumps a generation counter. The timer future returns the
//! ticket it was started with, and only a ticket from the current generation
//! is allowed to dispatch a search.

use std::time::Duration;

/// Quiet period before a search is dispatched.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Queries shorter than this (in characters, after trimming) never hit the server.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    query: String,
}

impl DebounceTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede whatever is pending and start a new quiet period for `query`.
    pub fn schedule(&mut self, query: impl Into<String>) -> DebounceTicket {
        self.generation += 1;
        self.pending = true;
        DebounceTicket {
            generation: self.generation,
            query: query.into(),
        }
    }

    /// Drop the pending dispatch, if any. Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called when a timer elapses. Returns the query to search for, or `None`
    /// if the ticket was superseded or already fired.
    pub fn fire(&mut self, ticket: &DebounceTicket) -> Option<String> {
        if self.pending && ticket.generation == self.generation {
            self.pending = false;
            Some(ticket.query.clone())
        } else {
            None
        }
    }
}

/// Timer half of the debouncer, run as an iced command.
pub async fn wait(ticket: DebounceTicket) -> DebounceTicket {
    tokio::time::sleep(DEBOUNCE_DELAY).await;
    ticket
}

pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}
