use crate::catalog::MovieSummary;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the list screen.
///
/// Request-issuing intents carry the sequence tag the app allocated
/// for the outbound request; completion intents echo the tag of the
/// request they answer.
#[derive(Debug, Clone)]
pub enum BrowseIntent {
    /// The search input changed. Text only; whether a request goes out
    /// is decided at the app boundary.
    QueryChanged { query: String },

    /// A popular-movies request was issued.
    PopularRequested { seq: u64 },

    /// A search request was issued.
    SearchRequested { seq: u64 },

    /// A listing or search request resolved successfully.
    ResultsLoaded { seq: u64, movies: Vec<MovieSummary> },

    /// A listing or search request failed; `message` is the fixed
    /// user-facing text (the cause is logged elsewhere).
    FetchFailed { seq: u64, message: String },

    /// Move the cursor by the given offset.
    MoveSelection { delta: i32 },
}

impl Intent for BrowseIntent {}
