//! Client-side error taxonomy, mirroring the server's.

/// Error type for client operations.
///
/// `NotFound` and `Api` are structured server responses; `Transport`
/// covers failures of the round-trip itself (connect, timeout, DNS);
/// `Decode` covers payloads that do not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Resource not found")]
    NotFound,

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response payload: {0}")]
    Decode(String),
}
