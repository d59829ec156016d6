//! The movie list screen: popular listings with live search.

mod intent;
mod reducer;
mod state;

pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::{BrowseState, BrowseViewState};
