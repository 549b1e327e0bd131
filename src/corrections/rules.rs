//! The hard-coded correction table.
//!
//! Each entry pairs an exact-match predicate with one field assignment.
//! Predicates test the pre-correction value, so re-running the fixer on
//! its own output matches nothing; that is the whole idempotence story.

use crate::models::HospitalRecord;

/// One field the predicate requires, by exact string equality.
#[derive(Debug, Clone, Copy)]
pub struct FieldMatch {
    pub field: &'static str,
    pub equals: &'static str,
}

/// A record correction: match every predicate field, then overwrite one.
#[derive(Debug, Clone, Copy)]
pub struct Correction {
    /// Conjunction of exact-equality requirements. A record missing one of
    /// these fields simply does not match.
    pub predicate: &'static [FieldMatch],
    /// Field written when the predicate holds.
    pub set_field: &'static str,
    pub set_value: &'static str,
    /// Console progress line (rendered behind a checkmark glyph).
    pub progress: &'static str,
    /// Line item for the end-of-run summary.
    pub description: &'static str,
}

impl Correction {
    pub fn matches(&self, record: &HospitalRecord) -> bool {
        self.predicate
            .iter()
            .all(|m| record.field_str(m.field) == Some(m.equals))
    }
}

/// Corrections found during the 100% accuracy verification pass.
/// Applied top to bottom; when entries overlap, the last write wins.
pub const CORRECTIONS: &[Correction] = &[
    // Allenmore was listed under Island Hospital's CMS number.
    Correction {
        predicate: &[
            FieldMatch {
                field: "name",
                equals: "MULTICARE ALLENMORE HOSPITAL",
            },
            FieldMatch {
                field: "cmsId",
                equals: "500007",
            },
        ],
        set_field: "cmsId",
        set_value: "500129",
        progress: "Fixed MultiCare Allenmore Hospital CMS ID: 500007 → 500129",
        description: "MultiCare Allenmore Hospital CMS ID: 500007 → 500129 (was duplicate with Island Hospital)",
    },
    // Bellingham St Joseph, listed without its PeaceHealth prefix.
    Correction {
        predicate: &[
            FieldMatch {
                field: "cmsId",
                equals: "500030",
            },
            FieldMatch {
                field: "name",
                equals: "ST JOSEPH HOSPITAL",
            },
        ],
        set_field: "name",
        set_value: "PEACEHEALTH ST JOSEPH MEDICAL CENTER",
        progress: "Fixed hospital name: ST JOSEPH HOSPITAL → PEACEHEALTH ST JOSEPH MEDICAL CENTER",
        description: "Renamed 'ST JOSEPH HOSPITAL' → 'PEACEHEALTH ST JOSEPH MEDICAL CENTER' (Bellingham)",
    },
];
