use crate::catalog::MovieDetail;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the detail screen.
#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A new fetch for the same movie was issued (manual retry).
    FetchStarted { seq: u64 },

    /// The detail request resolved successfully.
    Loaded { seq: u64, movie: MovieDetail },

    /// The detail request failed; `message` is the fixed user-facing
    /// text.
    FetchFailed { seq: u64, message: String },
}

impl Intent for DetailIntent {}
