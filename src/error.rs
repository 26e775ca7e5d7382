//! Unified error type for all DNSPod operations.

use thiserror::Error;

/// Error type covering every failure mode of the client.
///
/// Record creation propagates all of these to the caller. Record removal
/// catches and logs every one of them — the full set of suppressed failure
/// kinds is exactly the variants below.
#[derive(Error, Debug)]
pub enum Error {
    /// No enabled domain on the account matches any suffix of the record name.
    #[error("unable to determine base domain for '{record}' (tried: {})", .guesses.join(", "))]
    Resolution {
        /// The record name that could not be resolved.
        record: String,
        /// Every candidate base domain that was tried, longest first.
        guesses: Vec<String>,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("network error: {detail}")]
    Network {
        /// Error details from the transport.
        detail: String,
    },

    /// The API answered with a non-success HTTP status.
    #[error("http error status: {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The API answered 200 but its status envelope reported a failure
    /// (envelope code other than `"1"`).
    #[error("[{method}] API error: {message}")]
    Api {
        /// The API method that failed (e.g. `Record.Create`).
        method: String,
        /// The provider's own error message.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },
}

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
