use thiserror::Error;

/// Errors returned by [`CatalogClient`](crate::catalog::CatalogClient).
///
/// Failure causes are classified at the client boundary; callers that
/// surface errors to the user collapse all variants into one fixed
/// message and log the details.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}
