//! Outbound analysis request: multipart build, POST, status branching.
//!
//! One submission is exactly one POST — there is no retry loop and no
//! polling. The service either answers with a recognisable document,
//! refuses the media type with a 415 (surfaced as its own error kind so
//! hosts can tell the user to pick a different file), or fails
//! generically.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::wire::RecognizedDocument;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// Form field the document travels under.
pub const FILE_PART_NAME: &str = "form";

/// Content type declared for the document, and for the request itself.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Header carrying the caller's API subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Submit the document bytes to the configured analysis endpoint and
/// parse the response body.
///
/// Status branching: 415 maps to
/// [`UnsupportedMedia`](ExtractError::UnsupportedMedia); any other
/// non-2xx status, and any transport-level failure, maps to
/// [`RemoteFailure`](ExtractError::RemoteFailure). A 2xx body that is
/// not valid JSON of the expected shape maps to
/// [`MalformedResponse`](ExtractError::MalformedResponse).
pub async fn analyze(
    client: &reqwest::Client,
    bytes: Vec<u8>,
    config: &ExtractionConfig,
) -> Result<RecognizedDocument, ExtractError> {
    let part = Part::bytes(bytes)
        .file_name("document.pdf")
        .mime_str(PDF_CONTENT_TYPE)
        .map_err(|e| ExtractError::Internal(format!("multipart part: {e}")))?;
    let form = Form::new().part(FILE_PART_NAME, part);

    debug!("POST {}", config.endpoint_url);

    // The content-type header is pinned to application/pdf after the
    // multipart body is attached; the service keys its media check on
    // the declared document type, not the envelope.
    let response = client
        .post(&config.endpoint_url)
        .multipart(form)
        .header(SUBSCRIPTION_KEY_HEADER, &config.subscription_key)
        .header(CONTENT_TYPE, PDF_CONTENT_TYPE)
        .timeout(Duration::from_secs(config.api_timeout_secs))
        .send()
        .await
        .map_err(|e| {
            warn!("Analysis request transport failure: {e}");
            ExtractError::RemoteFailure {
                reason: e.to_string(),
            }
        })?;

    let status = response.status();
    if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        warn!("Analysis endpoint rejected media type (HTTP 415)");
        return Err(ExtractError::UnsupportedMedia);
    }
    if !status.is_success() {
        warn!("Analysis endpoint returned HTTP {status}");
        return Err(ExtractError::RemoteFailure {
            reason: format!("HTTP {status}"),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ExtractError::RemoteFailure {
            reason: format!("failed to read response body: {e}"),
        })?;

    debug!("Analysis response: {} bytes", body.len());

    serde_json::from_str(&body).map_err(|e| ExtractError::MalformedResponse {
        detail: e.to_string(),
    })
}
