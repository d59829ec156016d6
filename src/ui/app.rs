use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::fetcher::{FetchCommand, FetchHandle, FetchOutcome};
use crate::ui::mvi::Reducer;

/// Queries must be strictly longer than this (after trimming) before a
/// search request goes out.
pub const SEARCH_MIN_CHARS: usize = 3;

/// Fixed user-facing message for list fetch failures. The underlying
/// cause is logged, never shown.
pub const LIST_FETCH_ERROR: &str = "Terjadi kesalahan saat mengambil data";

/// Fixed user-facing message for detail fetch failures.
pub const DETAIL_FETCH_ERROR: &str = "Terjadi kesalahan saat mengambil detail film";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Browse,
    Detail,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns both screen states and the effect boundary between them and
/// the fetch worker.
///
/// Reducers stay pure; everything with a side effect happens here:
/// allocating a request tag, submitting a fetch command, translating
/// an error into its fixed message.
pub struct App {
    should_quit: bool,
    screen: Screen,
    /// List screen state (MVI pattern). Lives for the whole session.
    browse: BrowseState,
    /// Detail screen state (MVI pattern). Present only while the
    /// detail screen is mounted.
    detail: Option<DetailState>,
    fetch: FetchHandle,
    image_base_url: String,
    /// Monotonic request-tag source shared by both screens.
    next_seq: u64,
}

impl App {
    /// Create the app and issue the list screen's mount fetch.
    pub fn new(fetch: FetchHandle, image_base_url: String) -> Self {
        let mut app = Self {
            should_quit: false,
            screen: Screen::Browse,
            browse: BrowseState::default(),
            detail: None,
            fetch,
            image_base_url,
            next_seq: 0,
        };
        app.request_popular();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    // ========================================================================
    // List screen actions
    // ========================================================================

    pub fn on_char(&mut self, c: char) {
        let mut query = self.browse.query.clone();
        query.push(c);
        self.set_query(query);
    }

    pub fn on_backspace(&mut self) {
        let mut query = self.browse.query.clone();
        if query.pop().is_none() {
            return;
        }
        self.set_query(query);
    }

    /// Manual clear: reset the query text and re-fetch the popular page.
    pub fn clear_query(&mut self) {
        self.dispatch_browse(BrowseIntent::QueryChanged {
            query: String::new(),
        });
        self.request_popular();
    }

    pub fn move_selection(&mut self, delta: i32) {
        self.dispatch_browse(BrowseIntent::MoveSelection { delta });
    }

    /// Manual retry on the list screen, re-issuing the request shape
    /// the current query calls for.
    pub fn retry_list(&mut self) {
        let trimmed = self.browse.query.trim();
        if trimmed.chars().count() > SEARCH_MIN_CHARS {
            let query = trimmed.to_string();
            self.request_search(query);
        } else {
            self.request_popular();
        }
    }

    /// Query text changed; decide whether a request goes out.
    ///
    /// Empty (after trimming) re-fetches the popular page and leaves
    /// search mode. Queries of 1 to `SEARCH_MIN_CHARS` characters issue
    /// nothing. Longer queries go to search, trimmed.
    fn set_query(&mut self, query: String) {
        self.dispatch_browse(BrowseIntent::QueryChanged {
            query: query.clone(),
        });
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.request_popular();
        } else if trimmed.chars().count() > SEARCH_MIN_CHARS {
            let query = trimmed.to_string();
            self.request_search(query);
        }
    }

    fn request_popular(&mut self) {
        let seq = self.alloc_seq();
        self.fetch.send(FetchCommand::Popular { seq });
        self.dispatch_browse(BrowseIntent::PopularRequested { seq });
    }

    fn request_search(&mut self, query: String) {
        let seq = self.alloc_seq();
        self.fetch.send(FetchCommand::Search { seq, query });
        self.dispatch_browse(BrowseIntent::SearchRequested { seq });
    }

    // ========================================================================
    // Detail screen actions
    // ========================================================================

    /// Navigate to the detail screen for the movie under the cursor.
    pub fn open_selected(&mut self) {
        let Some(movie_id) = self.browse.selected_movie().map(|movie| movie.id) else {
            return;
        };
        let seq = self.alloc_seq();
        self.fetch.send(FetchCommand::Detail { seq, movie_id });
        self.detail = Some(DetailState::mounted(movie_id, seq));
        self.screen = Screen::Detail;
    }

    /// Navigate back; the detail state is discarded entirely.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Browse;
    }

    /// Manual retry on the detail screen, same identifier.
    pub fn retry_detail(&mut self) {
        let Some(movie_id) = self.detail.as_ref().map(|detail| detail.movie_id) else {
            return;
        };
        let seq = self.alloc_seq();
        self.fetch.send(FetchCommand::Detail { seq, movie_id });
        self.dispatch_detail(DetailIntent::FetchStarted { seq });
    }

    // ========================================================================
    // Fetch outcomes
    // ========================================================================

    /// Route a resolved fetch to the owning screen, converting failures
    /// into their fixed messages. Stale tags are dropped by the
    /// reducers; outcomes for an unmounted detail screen are dropped
    /// here.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Popular { seq, result } | FetchOutcome::Search { seq, result } => {
                match result {
                    Ok(movies) => {
                        self.dispatch_browse(BrowseIntent::ResultsLoaded { seq, movies });
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "movie list fetch failed");
                        self.dispatch_browse(BrowseIntent::FetchFailed {
                            seq,
                            message: LIST_FETCH_ERROR.to_string(),
                        });
                    }
                }
            }
            FetchOutcome::Detail {
                seq,
                movie_id,
                result,
            } => {
                if self.detail.is_none() {
                    return;
                }
                match result {
                    Ok(movie) => self.dispatch_detail(DetailIntent::Loaded { seq, movie }),
                    Err(err) => {
                        tracing::warn!(error = %err, movie_id, "movie detail fetch failed");
                        self.dispatch_detail(DetailIntent::FetchFailed {
                            seq,
                            message: DETAIL_FETCH_ERROR.to_string(),
                        });
                    }
                }
            }
        }
    }

    fn dispatch_browse(&mut self, intent: BrowseIntent) {
        dispatch_mvi!(self, browse, BrowseReducer, intent);
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        if let Some(state) = self.detail.take() {
            self.detail = Some(DetailReducer::reduce(state, intent));
        }
    }

    fn alloc_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}
