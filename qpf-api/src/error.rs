/// Error types for talking to the pattern search service
use thiserror::Error;

/// Transport-tier failures raised while fetching or decoding a response.
///
/// Data-shape problems inside a well-formed payload are NOT errors; those
/// degrade to placeholder display values in the rendering layer. This enum
/// only covers the cases where no usable payload was obtained at all.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No `window` object (not running in a browser context)
    #[error("browser window object not available")]
    NoWindow,

    /// The fetch itself rejected (network failure, CORS, aborted, ...)
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read as text
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The response body was not decodable as any known payload shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Non-success HTTP status with an undecodable body
    #[error("server returned HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
