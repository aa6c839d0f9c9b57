// Error taxonomy for the API client. Each operation either returns a
// fully-formed value or exactly one of these; nothing is retried or
// swallowed inside the library.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by [`Session`](crate::api::Session) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed: connection failure, TLS problem, or
    /// the client-wide timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the accepted
    /// `[200, 400)` range. The raw body is kept for diagnostics.
    #[error("server returned {status}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape the operation expects.
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}
