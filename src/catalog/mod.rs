//! Client for the remote movie catalog service.
//!
//! Three idempotent read operations over a TMDB-compatible REST API:
//! popular listings, title search, and per-movie detail records. The
//! client carries no state between calls beyond the connection pool.

pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{Genre, MovieDetail, MovieSummary};
