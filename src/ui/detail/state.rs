use crate::catalog::MovieDetail;
use crate::ui::mvi::UiState;

/// What the detail screen is showing right now.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailViewState {
    #[default]
    Loading,

    Loaded { movie: MovieDetail },

    Error { message: String },
}

/// Complete state of the detail screen.
///
/// Created when the screen is entered and discarded when the user
/// navigates back; a later visit starts from scratch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// Identifier supplied by the list screen on navigation.
    pub movie_id: u64,
    pub view: DetailViewState,
    /// Tag of the most recently issued request; stale completions are
    /// discarded.
    pub issued_seq: u64,
}

impl UiState for DetailState {}

impl DetailState {
    /// Fresh state for a screen visit whose initial fetch was just
    /// issued under `seq`.
    pub fn mounted(movie_id: u64, seq: u64) -> Self {
        Self {
            movie_id,
            view: DetailViewState::Loading,
            issued_seq: seq,
        }
    }

    pub fn movie(&self) -> Option<&MovieDetail> {
        match &self.view {
            DetailViewState::Loaded { movie } => Some(movie),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            DetailViewState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.view, DetailViewState::Loading)
    }
}
