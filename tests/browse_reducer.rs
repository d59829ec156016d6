use layar::catalog::MovieSummary;
use layar::ui::browse::{BrowseIntent, BrowseReducer, BrowseState, BrowseViewState};
use layar::ui::mvi::Reducer;

fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: None,
        overview: String::new(),
        release_date: String::new(),
        vote_average: None,
    }
}

fn loaded(movies: Vec<MovieSummary>) -> BrowseState {
    BrowseState {
        view: BrowseViewState::Loaded { movies },
        ..BrowseState::default()
    }
}

#[test]
fn initial_request_shows_loading() {
    let state = BrowseReducer::reduce(
        BrowseState::default(),
        BrowseIntent::PopularRequested { seq: 1 },
    );
    assert_eq!(state.view, BrowseViewState::Loading);
    assert_eq!(state.issued_seq, 1);
}

#[test]
fn results_keep_api_order() {
    let state = BrowseReducer::reduce(
        BrowseState::default(),
        BrowseIntent::PopularRequested { seq: 1 },
    );
    // Deliberately not alphabetical and not by id.
    let movies = vec![movie(9, "Zebra"), movie(2, "Agak Laen"), movie(5, "Merah")];
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::ResultsLoaded {
            seq: 1,
            movies: movies.clone(),
        },
    );
    assert_eq!(state.movies(), Some(movies.as_slice()));
}

#[test]
fn failure_shows_error_message() {
    let state = BrowseReducer::reduce(
        BrowseState::default(),
        BrowseIntent::PopularRequested { seq: 1 },
    );
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::FetchFailed {
            seq: 1,
            message: "Terjadi kesalahan saat mengambil data".to_string(),
        },
    );
    assert_eq!(
        state.error_message(),
        Some("Terjadi kesalahan saat mengambil data")
    );
}

#[test]
fn requery_keeps_previous_movies_visible() {
    let state = loaded(vec![movie(1, "Gundala")]);
    let state = BrowseReducer::reduce(state, BrowseIntent::SearchRequested { seq: 2 });
    assert!(matches!(state.view, BrowseViewState::Searching { .. }));
    assert_eq!(state.movies().map(<[_]>::len), Some(1));
}

#[test]
fn popular_refetch_after_loaded_keeps_movies_visible() {
    // Clearing the query re-fetches popular; the old list stays on
    // screen while the fetch is in flight.
    let state = loaded(vec![movie(1, "Gundala")]);
    let state = BrowseReducer::reduce(state, BrowseIntent::PopularRequested { seq: 2 });
    assert!(matches!(state.view, BrowseViewState::Searching { .. }));
}

#[test]
fn retry_from_error_shows_loading() {
    let state = BrowseState {
        view: BrowseViewState::Error {
            message: "x".to_string(),
        },
        ..BrowseState::default()
    };
    let state = BrowseReducer::reduce(state, BrowseIntent::PopularRequested { seq: 3 });
    assert_eq!(state.view, BrowseViewState::Loading);
}

#[test]
fn stale_results_are_discarded() {
    let state = BrowseReducer::reduce(
        BrowseState::default(),
        BrowseIntent::SearchRequested { seq: 2 },
    );
    let before = state.clone();
    // A response for the superseded request 1 arrives late.
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::ResultsLoaded {
            seq: 1,
            movies: vec![movie(1, "Lama")],
        },
    );
    assert_eq!(state, before);
}

#[test]
fn stale_failure_is_discarded() {
    let state = BrowseState {
        view: BrowseViewState::Loaded {
            movies: vec![movie(1, "Gundala")],
        },
        issued_seq: 5,
        ..BrowseState::default()
    };
    let before = state.clone();
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::FetchFailed {
            seq: 4,
            message: "x".to_string(),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn new_results_reset_selection() {
    let state = BrowseState {
        view: BrowseViewState::Loaded {
            movies: vec![movie(1, "A"), movie(2, "B"), movie(3, "C")],
        },
        selected: 2,
        issued_seq: 1,
        ..BrowseState::default()
    };
    let state = BrowseReducer::reduce(state, BrowseIntent::SearchRequested { seq: 2 });
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::ResultsLoaded {
            seq: 2,
            movies: vec![movie(4, "D")],
        },
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_clamps_at_both_ends() {
    let state = loaded(vec![movie(1, "A"), movie(2, "B")]);
    let state = BrowseReducer::reduce(state, BrowseIntent::MoveSelection { delta: -1 });
    assert_eq!(state.selected, 0);
    let state = BrowseReducer::reduce(state, BrowseIntent::MoveSelection { delta: 1 });
    let state = BrowseReducer::reduce(state, BrowseIntent::MoveSelection { delta: 1 });
    assert_eq!(state.selected, 1);
}

#[test]
fn selection_ignored_without_movies() {
    let state = BrowseReducer::reduce(
        BrowseState::default(),
        BrowseIntent::MoveSelection { delta: 1 },
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn query_change_leaves_view_untouched() {
    let state = loaded(vec![movie(1, "Gundala")]);
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::QueryChanged {
            query: "gun".to_string(),
        },
    );
    assert_eq!(state.query, "gun");
    assert!(matches!(state.view, BrowseViewState::Loaded { .. }));
}
