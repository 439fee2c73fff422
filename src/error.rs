//! Error types for the form2fields library.
//!
//! Every failure a submission can hit is classified into one
//! [`ExtractError`] variant, and all of them are recoverable: the
//! extractor clears its busy state on each terminal path, so a caller
//! can submit again after any error. The four wire-level kinds
//! ([`UnsupportedMedia`](ExtractError::UnsupportedMedia),
//! [`RemoteFailure`](ExtractError::RemoteFailure),
//! [`MalformedResponse`](ExtractError::MalformedResponse),
//! [`EmptyExtraction`](ExtractError::EmptyExtraction)) are the contract
//! the host maps to user-facing messages; the remaining variants cover
//! local input validation and misuse.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the form2fields library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Submission errors ─────────────────────────────────────────────────
    /// A submission is already in flight. Only one analysis request may
    /// be outstanding at a time; wait for it to resolve and resubmit.
    #[error("A document submission is already in progress")]
    Busy,

    /// The analysis service rejected the document media type (HTTP 415).
    #[error("The analysis service does not support this document type")]
    UnsupportedMedia,

    /// The analysis service returned a non-success status, or the
    /// request failed at the transport level (DNS, refused connection,
    /// timeout).
    #[error("Analysis request failed: {reason}")]
    RemoteFailure { reason: String },

    /// The service answered with success but the body was not valid
    /// JSON, or lacked the expected `pages[0].keyValuePairs` shape.
    #[error("Analysis response could not be parsed: {detail}")]
    MalformedResponse { detail: String },

    /// The response parsed correctly but none of the known field labels
    /// were present on the first page.
    #[error("No recognisable fields were found in the document")]
    EmptyExtraction,

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
