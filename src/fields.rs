//! The extracted-field record and the label table that drives it.
//!
//! The recognition service reports key/value pairs whose keys are the
//! literal label strings printed on the form ("Last Name:", "E-mail:",
//! …). Mapping those labels to record fields is a small closed
//! enumeration, so it lives in one declarative table ([`LABELS`])
//! rather than a chain of conditionals — tests can iterate the table
//! directly, and adding a field means adding exactly one row.

use serde::{Deserialize, Serialize};

/// The five fields the pipeline knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    LastName,
    FirstName,
    JobTitle,
    Email,
    Telephone,
}

/// Label table: the exact key text the service must report for each
/// target field. Matching is exact-string and case-sensitive, with no
/// trimming — the labels are printed on the form and come back
/// verbatim.
pub const LABELS: [(&str, FieldKind); 5] = [
    ("Last Name:", FieldKind::LastName),
    ("First Name:", FieldKind::FirstName),
    ("Job Title:", FieldKind::JobTitle),
    ("E-mail:", FieldKind::Email),
    ("Telephone:", FieldKind::Telephone),
];

impl FieldKind {
    /// Look up the target field for a recognised key label.
    ///
    /// Returns `None` for any label outside the table; unknown labels
    /// are skipped by the mapping stage, never an error.
    pub fn from_label(label: &str) -> Option<FieldKind> {
        LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, kind)| *kind)
    }

    /// The label text this field is recognised by.
    pub fn label(self) -> &'static str {
        LABELS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(label, _)| *label)
            .unwrap_or_default()
    }
}

/// The output record of one submission.
///
/// Each field is `None` when the corresponding label was not found in
/// the document. A record with every field `None` is never returned:
/// the pipeline classifies it as
/// [`EmptyExtraction`](crate::error::ExtractError::EmptyExtraction)
/// instead. A fresh record is created for every submission — there is
/// no shared state between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

impl ExtractedFields {
    /// Assign a value to the field behind `kind`, overwriting any
    /// previous value (duplicate labels resolve last-write-wins).
    pub fn set(&mut self, kind: FieldKind, value: String) {
        match kind {
            FieldKind::LastName => self.last_name = Some(value),
            FieldKind::FirstName => self.first_name = Some(value),
            FieldKind::JobTitle => self.job_title = Some(value),
            FieldKind::Email => self.email = Some(value),
            FieldKind::Telephone => self.telephone = Some(value),
        }
    }

    /// Read the field behind `kind`.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::LastName => self.last_name.as_deref(),
            FieldKind::FirstName => self.first_name.as_deref(),
            FieldKind::JobTitle => self.job_title.as_deref(),
            FieldKind::Email => self.email.as_deref(),
            FieldKind::Telephone => self.telephone.as_deref(),
        }
    }

    /// A record counts as populated when at least one field is set.
    pub fn is_populated(&self) -> bool {
        LABELS.iter().any(|(_, kind)| self.get(*kind).is_some())
    }
}
