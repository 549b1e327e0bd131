//! Duplicate CMS ID verification.
//!
//! Reporting only: the scan surfaces surviving duplicates for the operator
//! to review and never tries to resolve them itself.

use std::collections::HashMap;

use serde::Serialize;

use crate::db::{DatabaseError, HospitalRegistry};

/// One CMS ID carried by more than one record.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateCmsId {
    pub cms_id: String,
    /// Names of every record sharing the id, in record order.
    pub names: Vec<String>,
}

/// Outcome of the duplicate scan.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    /// Violations, ordered by each id's first appearance in the registry.
    pub duplicates: Vec<DuplicateCmsId>,
    /// Distinct non-placeholder ids inspected.
    pub ids_checked: usize,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Index every tracked CMS ID and report ids held by multiple records.
///
/// Records whose id is absent, empty or the placeholder are skipped.
/// Every indexed record must have a `name`; a record without one fails
/// the scan, which runs before anything is written back.
pub fn find_duplicate_cms_ids(
    registry: &HospitalRegistry,
) -> Result<DuplicateReport, DatabaseError> {
    let mut names_by_id: HashMap<&str, Vec<String>> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();

    for (index, record) in registry.records().iter().enumerate() {
        let Some(cms_id) = record.tracked_cms_id() else {
            continue;
        };
        let name = record.name().ok_or_else(|| DatabaseError::MissingField {
            record: record.describe(index),
            field: "name".into(),
        })?;

        let names = names_by_id.entry(cms_id).or_default();
        if names.is_empty() {
            seen_order.push(cms_id);
        }
        names.push(name.to_string());
    }

    let ids_checked = names_by_id.len();
    let duplicates = seen_order
        .into_iter()
        .filter_map(|id| {
            let names = names_by_id.remove(id)?;
            (names.len() > 1).then(|| DuplicateCmsId {
                cms_id: id.to_string(),
                names,
            })
        })
        .collect();

    Ok(DuplicateReport {
        duplicates,
        ids_checked,
    })
}
