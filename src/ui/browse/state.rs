use crate::catalog::MovieSummary;
use crate::ui::mvi::UiState;

/// What the list screen is showing right now.
///
/// Exactly one variant holds at a time; transitions are driven by
/// issued requests and their completions. `Searching` keeps the
/// previous result set so the list stays visible while a re-query is
/// in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BrowseViewState {
    /// Initial fetch (or retry) in flight, nothing to show yet.
    #[default]
    Loading,

    /// A result set is on screen.
    Loaded { movies: Vec<MovieSummary> },

    /// A re-query is in flight; `movies` is the previous result set.
    Searching { movies: Vec<MovieSummary> },

    /// The last fetch failed; `message` is the fixed user-facing text.
    Error { message: String },
}

/// Complete state of the list screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseState {
    pub view: BrowseViewState,
    /// Current search input, exactly as typed.
    pub query: String,
    /// Cursor into the visible result set.
    pub selected: usize,
    /// Tag of the most recently issued request. Completions carrying
    /// any older tag are discarded.
    pub issued_seq: u64,
}

impl UiState for BrowseState {}

impl BrowseState {
    /// The result set currently on screen, if any.
    pub fn movies(&self) -> Option<&[MovieSummary]> {
        match &self.view {
            BrowseViewState::Loaded { movies } | BrowseViewState::Searching { movies } => {
                Some(movies)
            }
            _ => None,
        }
    }

    /// The movie under the cursor, if any.
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.movies().and_then(|movies| movies.get(self.selected))
    }

    /// True while a request is outstanding.
    pub fn is_fetching(&self) -> bool {
        matches!(
            self.view,
            BrowseViewState::Loading | BrowseViewState::Searching { .. }
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            BrowseViewState::Error { message } => Some(message),
            _ => None,
        }
    }
}
