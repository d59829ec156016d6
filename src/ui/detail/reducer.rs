use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::{DetailState, DetailViewState};

/// Reducer for detail screen state transitions.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::FetchStarted { seq } => DetailState {
                view: DetailViewState::Loading,
                issued_seq: seq,
                ..state
            },

            DetailIntent::Loaded { seq, movie } => {
                if seq != state.issued_seq {
                    return state;
                }
                DetailState {
                    view: DetailViewState::Loaded { movie },
                    ..state
                }
            }

            DetailIntent::FetchFailed { seq, message } => {
                if seq != state.issued_seq {
                    return state;
                }
                DetailState {
                    view: DetailViewState::Error { message },
                    ..state
                }
            }
        }
    }
}
