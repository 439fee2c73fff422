//! Submission entry points.
//!
//! [`FieldExtractor`] owns the HTTP client and the busy flag; each
//! accepted submission walks the pipeline stages and returns a fresh
//! [`ExtractedFields`] record. There is no state carried from one
//! submission to the next — the record is the return value, nothing
//! else.
//!
//! ## Busy discipline
//!
//! The extractor runs one submission at a time:
//! Idle → Submitting → (Success | Failed) → Idle. A `submit` call while
//! another is in flight is rejected immediately with
//! [`ExtractError::Busy`] — no queueing. The flag is claimed with a
//! compare-exchange and released by an RAII guard, so every terminal
//! path (success, HTTP error, parse error, transport error) restores
//! Idle and fires [`BusyCallback::on_busy_end`].

use crate::busy::BusyCallback;
use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::fields::ExtractedFields;
use crate::pipeline::{input, map, request};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Submits documents to the analysis endpoint, one at a time.
///
/// The extractor is cheap to create and intended to live as long as
/// the host; the underlying HTTP client pools connections across
/// submissions. Configuration is borrowed per call, so endpoint and
/// key may change between submissions.
///
/// # Example
/// ```rust,no_run
/// use form2fields::{ExtractionConfig, FieldExtractor};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::builder()
///     .endpoint_url("https://recognizer.example.com/analyze")
///     .subscription_key("0123456789abcdef")
///     .build()?;
///
/// let extractor = FieldExtractor::new();
/// let fields = extractor.submit_file("application.pdf", &config).await?;
/// println!("e-mail: {:?}", fields.email);
/// # Ok(())
/// # }
/// ```
pub struct FieldExtractor {
    client: reqwest::Client,
    busy: AtomicBool,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    /// Create an extractor with a default HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submit raw document bytes for analysis.
    ///
    /// This is the primary entry point for the library.
    ///
    /// # Errors
    /// - [`ExtractError::Busy`] if another submission is in flight
    /// - [`ExtractError::UnsupportedMedia`] on HTTP 415
    /// - [`ExtractError::RemoteFailure`] on other HTTP or transport failures
    /// - [`ExtractError::MalformedResponse`] when the body cannot be parsed
    /// - [`ExtractError::EmptyExtraction`] when no known label was found
    pub async fn submit(
        &self,
        bytes: Vec<u8>,
        config: &ExtractionConfig,
    ) -> Result<ExtractedFields, ExtractError> {
        let _guard = BusyGuard::claim(&self.busy, config.busy_callback.clone())?;
        let start = Instant::now();
        info!(
            "Submitting {} byte document to {}",
            bytes.len(),
            config.endpoint_url
        );

        let doc = request::analyze(&self.client, bytes, config).await?;
        let fields = map::map_document(&doc)?;

        debug!("Extraction finished in {:?}", start.elapsed());
        Ok(fields)
    }

    /// Submit a local PDF file for analysis.
    ///
    /// Validates the path and the `%PDF` magic bytes before going to
    /// the network, then delegates to [`submit`](Self::submit).
    pub async fn submit_file(
        &self,
        path: impl AsRef<Path>,
        config: &ExtractionConfig,
    ) -> Result<ExtractedFields, ExtractError> {
        let bytes = input::read_pdf(path)?;
        self.submit(bytes, config).await
    }

    /// Synchronous wrapper around [`submit`](Self::submit).
    ///
    /// Creates a temporary tokio runtime internally; for hosts without
    /// one of their own.
    pub fn submit_sync(
        &self,
        bytes: Vec<u8>,
        config: &ExtractionConfig,
    ) -> Result<ExtractedFields, ExtractError> {
        tokio::runtime::Runtime::new()
            .map_err(|e| ExtractError::Internal(format!("failed to create tokio runtime: {e}")))?
            .block_on(self.submit(bytes, config))
    }
}

/// RAII claim on the extractor's single in-flight slot.
///
/// Claiming fires `on_busy_start`; dropping clears the flag and fires
/// `on_busy_end`. Holding the release in `Drop` is what guarantees no
/// completion path leaves the flag set.
struct BusyGuard<'a> {
    busy: &'a AtomicBool,
    callback: Option<Arc<dyn BusyCallback>>,
}

impl<'a> BusyGuard<'a> {
    fn claim(
        busy: &'a AtomicBool,
        callback: Option<Arc<dyn BusyCallback>>,
    ) -> Result<Self, ExtractError> {
        if busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ExtractError::Busy);
        }
        if let Some(cb) = &callback {
            cb.on_busy_start();
        }
        Ok(Self { busy, callback })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        if let Some(cb) = &self.callback {
            cb.on_busy_end();
        }
    }
}
