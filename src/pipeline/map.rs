//! Response mapping: recognised key/value pairs → field record.
//!
//! Only the first page is consulted. Pair keys are matched verbatim
//! against the label table in [`crate::fields`]; anything else is
//! skipped without complaint, and duplicate labels resolve
//! last-write-wins in sequence order.

use crate::error::ExtractError;
use crate::fields::{ExtractedFields, FieldKind};
use crate::wire::RecognizedDocument;
use tracing::debug;

/// Fold page 0 of a recognised document into an [`ExtractedFields`]
/// record.
///
/// Fails with [`MalformedResponse`](ExtractError::MalformedResponse)
/// when the document has no pages, and with
/// [`EmptyExtraction`](ExtractError::EmptyExtraction) when page 0
/// contained none of the known labels — an all-empty record is a
/// failure, never a success.
pub fn map_document(doc: &RecognizedDocument) -> Result<ExtractedFields, ExtractError> {
    let page = doc.pages.first().ok_or_else(|| ExtractError::MalformedResponse {
        detail: "response contains no pages".into(),
    })?;

    let mut fields = ExtractedFields::default();
    for pair in &page.key_value_pairs {
        // A pair without at least one key span and one value span has
        // nothing to match or assign; treat it like an unknown label.
        let (Some(key), Some(value)) = (pair.key.first(), pair.value.first()) else {
            debug!("Skipping pair with empty key or value spans");
            continue;
        };

        if let Some(kind) = FieldKind::from_label(&key.text) {
            fields.set(kind, value.text.clone());
        } else {
            debug!("Skipping unrecognised label {:?}", key.text);
        }
    }

    if !fields.is_populated() {
        return Err(ExtractError::EmptyExtraction);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::LABELS;

    fn doc_from_pairs(pairs: &[(&str, &str)]) -> RecognizedDocument {
        let pairs: Vec<serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| {
                serde_json::json!({
                    "key": [{"text": k}],
                    "value": [{"text": v}],
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "pages": [{ "keyValuePairs": pairs }]
        }))
        .expect("test document must parse")
    }

    #[test]
    fn maps_every_known_label_regardless_of_order() {
        // Reversed table order: position in the sequence must not matter.
        let pairs: Vec<(&str, &str)> = LABELS
            .iter()
            .rev()
            .map(|(label, _)| (*label, "value"))
            .collect();
        let fields = map_document(&doc_from_pairs(&pairs)).expect("must map");

        for (_, kind) in LABELS {
            assert_eq!(fields.get(kind), Some("value"));
        }
    }

    #[test]
    fn duplicate_labels_resolve_last_write_wins() {
        let doc = doc_from_pairs(&[("First Name:", "A"), ("First Name:", "B")]);
        let fields = map_document(&doc).expect("must map");
        assert_eq!(fields.first_name.as_deref(), Some("B"));
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let doc = doc_from_pairs(&[("Middle Name:", "X"), ("E-mail:", "doe@x.com")]);
        let fields = map_document(&doc).expect("must map");
        assert_eq!(fields.email.as_deref(), Some("doe@x.com"));
        assert!(fields.first_name.is_none());
        assert!(fields.last_name.is_none());
    }

    #[test]
    fn zero_matches_is_empty_extraction() {
        let doc = doc_from_pairs(&[("Middle Name:", "X"), ("Fax:", "555-0100")]);
        assert!(matches!(
            map_document(&doc),
            Err(ExtractError::EmptyExtraction)
        ));
    }

    #[test]
    fn no_pairs_at_all_is_empty_extraction() {
        let doc = doc_from_pairs(&[]);
        assert!(matches!(
            map_document(&doc),
            Err(ExtractError::EmptyExtraction)
        ));
    }

    #[test]
    fn empty_pages_is_malformed() {
        let doc: RecognizedDocument =
            serde_json::from_value(serde_json::json!({ "pages": [] })).expect("must parse");
        assert!(matches!(
            map_document(&doc),
            Err(ExtractError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn degenerate_pairs_are_skipped_not_fatal() {
        let doc: RecognizedDocument = serde_json::from_value(serde_json::json!({
            "pages": [{ "keyValuePairs": [
                { "key": [], "value": [{"text": "orphan"}] },
                { "key": [{"text": "Job Title:"}], "value": [] },
                { "key": [{"text": "Job Title:"}], "value": [{"text": "Engineer"}] }
            ]}]
        }))
        .expect("must parse");

        let fields = map_document(&doc).expect("must map");
        assert_eq!(fields.job_title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn only_page_zero_is_consulted() {
        let doc: RecognizedDocument = serde_json::from_value(serde_json::json!({
            "pages": [
                { "keyValuePairs": [
                    { "key": [{"text": "Last Name:"}], "value": [{"text": "Doe"}] }
                ]},
                { "keyValuePairs": [
                    { "key": [{"text": "First Name:"}], "value": [{"text": "Ignored"}] }
                ]}
            ]
        }))
        .expect("must parse");

        let fields = map_document(&doc).expect("must map");
        assert_eq!(fields.last_name.as_deref(), Some("Doe"));
        assert!(fields.first_name.is_none());
    }

    // Two recognised labels, three absent.
    #[test]
    fn partial_document_maps_partially() {
        let doc: RecognizedDocument = serde_json::from_value(serde_json::json!({
            "pages": [{ "keyValuePairs": [
                { "key": [{"text": "Last Name:"}], "value": [{"text": "Doe"}] },
                { "key": [{"text": "E-mail:"}], "value": [{"text": "doe@x.com"}] }
            ]}]
        }))
        .expect("must parse");

        let fields = map_document(&doc).expect("must map");
        assert_eq!(fields.last_name.as_deref(), Some("Doe"));
        assert_eq!(fields.email.as_deref(), Some("doe@x.com"));
        assert!(fields.first_name.is_none());
        assert!(fields.job_title.is_none());
        assert!(fields.telephone.is_none());
    }
}
