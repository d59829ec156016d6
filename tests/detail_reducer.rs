use layar::catalog::{Genre, MovieDetail};
use layar::ui::detail::{DetailIntent, DetailReducer, DetailState, DetailViewState};
use layar::ui::mvi::Reducer;

fn sample_movie(id: u64) -> MovieDetail {
    MovieDetail {
        id,
        title: "Pengabdi Setan".to_string(),
        backdrop_path: Some("/backdrop.jpg".to_string()),
        poster_path: Some("/poster.jpg".to_string()),
        overview: "Sebuah keluarga diteror.".to_string(),
        release_date: "2017-09-28".to_string(),
        runtime: 107,
        vote_average: 6.9,
        popularity: 21.5,
        status: "Released".to_string(),
        budget: 1_000_000,
        revenue: 7_000_000,
        genres: vec![Genre {
            id: 27,
            name: "Horor".to_string(),
        }],
    }
}

#[test]
fn success_transitions_to_loaded() {
    let state = DetailState::mounted(42, 1);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            seq: 1,
            movie: sample_movie(42),
        },
    );
    assert_eq!(state.movie().map(|movie| movie.id), Some(42));
}

#[test]
fn failure_stores_fixed_message() {
    let state = DetailState::mounted(42, 1);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::FetchFailed {
            seq: 1,
            message: "Terjadi kesalahan saat mengambil detail film".to_string(),
        },
    );
    assert_eq!(
        state.error_message(),
        Some("Terjadi kesalahan saat mengambil detail film")
    );
}

#[test]
fn retry_returns_to_loading_with_new_tag() {
    let state = DetailState::mounted(42, 1);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::FetchFailed {
            seq: 1,
            message: "gagal".to_string(),
        },
    );
    let state = DetailReducer::reduce(state, DetailIntent::FetchStarted { seq: 2 });
    assert_eq!(state.view, DetailViewState::Loading);
    assert_eq!(state.issued_seq, 2);
    assert_eq!(state.movie_id, 42);
}

#[test]
fn retry_then_success_loads_movie() {
    let state = DetailState::mounted(42, 1);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::FetchFailed {
            seq: 1,
            message: "gagal".to_string(),
        },
    );
    let state = DetailReducer::reduce(state, DetailIntent::FetchStarted { seq: 2 });
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            seq: 2,
            movie: sample_movie(42),
        },
    );
    assert!(state.movie().is_some());
}

#[test]
fn stale_outcome_after_retry_is_discarded() {
    let state = DetailState::mounted(42, 1);
    let state = DetailReducer::reduce(state, DetailIntent::FetchStarted { seq: 2 });
    // The first request resolves late; its tag is superseded.
    let state = DetailReducer::reduce(
        state,
        DetailIntent::FetchFailed {
            seq: 1,
            message: "gagal".to_string(),
        },
    );
    assert_eq!(state.view, DetailViewState::Loading);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            seq: 1,
            movie: sample_movie(42),
        },
    );
    assert_eq!(state.view, DetailViewState::Loading);
}
