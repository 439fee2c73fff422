//! Wire types for the recognition service response.
//!
//! The service answers a successful analysis with:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "keyValuePairs": [
//!         { "key": [{"text": "Last Name:"}], "value": [{"text": "Doe"}] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `pages` and `keyValuePairs` are deliberately *required* fields: a
//! body missing either fails deserialisation and is classified as
//! [`MalformedResponse`](crate::error::ExtractError::MalformedResponse),
//! which keeps a truncated or wrong-shaped body distinguishable from a
//! document where recognition simply found nothing. The `key`/`value`
//! span arrays default to empty instead — a single degenerate pair
//! should not discard an otherwise good document.

use serde::Deserialize;

/// Parsed body of a successful analysis response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedDocument {
    /// Ordered pages; only the first is consulted by the mapping stage.
    pub pages: Vec<RecognizedPage>,
}

/// One page of recognised content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedPage {
    /// Key/value pairs in the order the service reported them.
    pub key_value_pairs: Vec<KeyValuePair>,
}

/// A recognised label and its associated value.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValuePair {
    #[serde(default)]
    pub key: Vec<TextSpan>,
    #[serde(default)]
    pub value: Vec<TextSpan>,
}

/// A fragment of recognised text.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSpan {
    pub text: String,
}
