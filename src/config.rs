//! Configuration for document submissions.
//!
//! Every knob lives in one [`ExtractionConfig`] struct, built via its
//! [`ExtractionConfigBuilder`]. The extractor borrows the config on
//! every call rather than capturing it at construction, so a host can
//! rotate the subscription key or point at a different endpoint between
//! submissions without re-initialising anything.

use crate::busy::BusyCallback;
use crate::error::ExtractError;
use std::fmt;
use std::sync::Arc;

/// Configuration for a document analysis submission.
///
/// Built via [`ExtractionConfig::builder()`].
///
/// # Example
/// ```rust
/// use form2fields::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .endpoint_url("https://recognizer.example.com/analyze")
///     .subscription_key("0123456789abcdef")
///     .api_timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// URL of the analysis endpoint the document is POSTed to.
    pub endpoint_url: String,

    /// Subscription key sent in the `Ocp-Apim-Subscription-Key` header.
    pub subscription_key: String,

    /// Transport-level timeout per analysis request in seconds. Default: 60.
    ///
    /// The pipeline itself enforces no timeout and supports no
    /// cancellation: once submitted, a request runs until the transport
    /// resolves it one way or the other. This is the only bound on how
    /// long that can take.
    pub api_timeout_secs: u64,

    /// Callback notified when a submission claims and releases the
    /// pipeline. Default: none.
    pub busy_callback: Option<Arc<dyn BusyCallback>>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            subscription_key: String::new(),
            api_timeout_secs: 60,
            busy_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("endpoint_url", &self.endpoint_url)
            // The key is a credential; log its presence, never its value.
            .field("subscription_key", &"<redacted>")
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field(
                "busy_callback",
                &self.busy_callback.as_ref().map(|_| "<dyn BusyCallback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = url.into();
        self
    }

    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.config.subscription_key = key.into();
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    pub fn busy_callback(mut self, callback: Arc<dyn BusyCallback>) -> Self {
        self.config.busy_callback = Some(callback);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.endpoint_url.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "endpoint_url must be set".into(),
            ));
        }
        if !c.endpoint_url.starts_with("http://") && !c.endpoint_url.starts_with("https://") {
            return Err(ExtractError::InvalidConfig(format!(
                "endpoint_url must be an HTTP/HTTPS URL, got '{}'",
                c.endpoint_url
            )));
        }
        if c.subscription_key.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "subscription_key must be set".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::busy::NoopBusyCallback;

    #[test]
    fn builder_validates_endpoint_presence() {
        let result = ExtractionConfig::builder().subscription_key("k").build();
        assert!(matches!(result, Err(ExtractError::InvalidConfig(_))));
    }

    #[test]
    fn builder_validates_endpoint_scheme() {
        let result = ExtractionConfig::builder()
            .endpoint_url("ftp://recognizer.example.com")
            .subscription_key("k")
            .build();
        assert!(matches!(result, Err(ExtractError::InvalidConfig(_))));
    }

    #[test]
    fn builder_validates_key_presence() {
        let result = ExtractionConfig::builder()
            .endpoint_url("https://recognizer.example.com/analyze")
            .build();
        assert!(matches!(result, Err(ExtractError::InvalidConfig(_))));
    }

    #[test]
    fn builder_accepts_complete_config() {
        let config = ExtractionConfig::builder()
            .endpoint_url("https://recognizer.example.com/analyze")
            .subscription_key("0123456789abcdef")
            .api_timeout_secs(30)
            .busy_callback(Arc::new(NoopBusyCallback))
            .build()
            .expect("complete config must build");

        assert_eq!(config.api_timeout_secs, 30);
        assert!(config.busy_callback.is_some());
    }

    #[test]
    fn debug_redacts_subscription_key() {
        let config = ExtractionConfig::builder()
            .endpoint_url("https://recognizer.example.com/analyze")
            .subscription_key("topsecret")
            .build()
            .unwrap();

        let dump = format!("{:?}", config);
        assert!(!dump.contains("topsecret"));
        assert!(dump.contains("<redacted>"));
    }

    #[test]
    fn timeout_has_floor_of_one_second() {
        let config = ExtractionConfig::builder()
            .endpoint_url("https://recognizer.example.com/analyze")
            .subscription_key("k")
            .api_timeout_secs(0)
            .build()
            .unwrap();
        assert_eq!(config.api_timeout_secs, 1);
    }
}
