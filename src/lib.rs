//! # form2fields
//!
//! Extract contact fields from PDF forms via a remote forms-recognition API.
//!
//! ## Why this crate?
//!
//! Forms-recognition services return a generic page/key-value structure
//! and leave the tedious part to the caller: uploading the document with
//! the right multipart shape and headers, telling a media-type rejection
//! apart from a generic outage, and folding the recognised labels into
//! the fields the application actually wants. This crate owns that
//! contract end to end — one call in, one typed record (or one classified
//! error) out — while staying host-agnostic: no UI assumptions, busy-state
//! signalling through callbacks only.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate local file, read bytes (path callers only)
//!  ├─ 2. Request  multipart POST with subscription-key header
//!  ├─ 3. Map      page-0 key/value pairs → five named fields
//!  └─ 4. Output   ExtractedFields record or classified ExtractError
//! ```
//!
//! One submission is in flight at a time; a second [`FieldExtractor::submit`]
//! while one is pending is rejected with [`ExtractError::Busy`] and the
//! busy flag is cleared on every terminal outcome.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use form2fields::{ExtractionConfig, FieldExtractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::builder()
//!         .endpoint_url("https://recognizer.example.com/formrecognizer/v1.0-preview/analyze")
//!         .subscription_key(std::env::var("FORM2FIELDS_KEY")?)
//!         .build()?;
//!
//!     let extractor = FieldExtractor::new();
//!     let fields = extractor.submit_file("application.pdf", &config).await?;
//!
//!     println!("name:  {:?} {:?}", fields.first_name, fields.last_name);
//!     println!("email: {:?}", fields.email);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `form2fields` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! form2fields = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod busy;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod pipeline;
pub mod wire;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use busy::{BusyCallback, NoopBusyCallback, SharedBusyCallback};
pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::ExtractError;
pub use extract::FieldExtractor;
pub use fields::{ExtractedFields, FieldKind, LABELS};
pub use wire::RecognizedDocument;
