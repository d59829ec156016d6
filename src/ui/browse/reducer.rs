use crate::ui::mvi::Reducer;

use super::intent::BrowseIntent;
use super::state::{BrowseState, BrowseViewState};

/// Reducer for list screen state transitions.
pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::QueryChanged { query } => BrowseState { query, ..state },

            BrowseIntent::PopularRequested { seq } | BrowseIntent::SearchRequested { seq } => {
                // A visible result set stays on screen during a re-query;
                // from the initial mount or an error there is nothing to
                // keep, so the screen shows the loading view.
                let view = match state.view {
                    BrowseViewState::Loaded { movies }
                    | BrowseViewState::Searching { movies } => {
                        BrowseViewState::Searching { movies }
                    }
                    BrowseViewState::Loading | BrowseViewState::Error { .. } => {
                        BrowseViewState::Loading
                    }
                };
                BrowseState {
                    view,
                    issued_seq: seq,
                    ..state
                }
            }

            BrowseIntent::ResultsLoaded { seq, movies } => {
                if seq != state.issued_seq {
                    // Superseded request; drop the stale result.
                    return state;
                }
                BrowseState {
                    view: BrowseViewState::Loaded { movies },
                    selected: 0,
                    ..state
                }
            }

            BrowseIntent::FetchFailed { seq, message } => {
                if seq != state.issued_seq {
                    return state;
                }
                BrowseState {
                    view: BrowseViewState::Error { message },
                    selected: 0,
                    ..state
                }
            }

            BrowseIntent::MoveSelection { delta } => {
                let Some(len) = state.movies().map(<[_]>::len) else {
                    return state;
                };
                if len == 0 {
                    return state;
                }
                let selected = if delta.is_negative() {
                    state.selected.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    (state.selected + delta as usize).min(len - 1)
                };
                BrowseState { selected, ..state }
            }
        }
    }
}
