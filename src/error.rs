//! Error types for spotracks.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for all spotracks operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential is missing or empty.
    #[error("Missing credential: {0} must be set and non-empty")]
    MissingCredential(&'static str),

    /// The token endpoint rejected the credentials or answered with garbage.
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        status: StatusCode,
        message: String,
    },

    /// The catalog API answered with a non-success status.
    #[error("Request to {url} failed with {status}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// More pages than the configured maximum were returned.
    #[error("Pagination stopped after {0} pages")]
    PaginationLimit(usize),

    /// A `next` link pointed to a page that was already fetched.
    #[error("Pagination cycle detected at {0}")]
    PaginationCycle(String),

    /// The given source is not a recognized Spotify URI, URL or ID.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// A line of a track list file is not a track URL.
    #[error("Invalid track list entry on line {line}: {content}")]
    InvalidTrackList { line: usize, content: String },

    /// An output path was given for a format that only prints to stdout.
    #[error("{0} output is printed to stdout and cannot be written to a file")]
    OutputNotSupported(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for spotracks operations.
pub type Result<T> = std::result::Result<T, Error>;
