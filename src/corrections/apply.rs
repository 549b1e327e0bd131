use serde::Serialize;

use crate::db::HospitalRegistry;

use super::rules::{Correction, CORRECTIONS};

/// One field mutation actually performed, in application order.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedCorrection {
    /// Console progress line (no glyph).
    pub progress: String,
    /// Line item for the end-of-run summary.
    pub description: String,
    pub field: String,
    pub previous: String,
    pub updated: String,
}

/// Apply the correction table to every matching record.
///
/// Corrections run in declaration order, each scanning the whole registry.
/// Returns one entry per mutated (correction, record) pair; an empty vec
/// means the registry was already clean.
pub fn apply_corrections(registry: &mut HospitalRegistry) -> Vec<AppliedCorrection> {
    apply_rules(registry, CORRECTIONS)
}

fn apply_rules(registry: &mut HospitalRegistry, rules: &[Correction]) -> Vec<AppliedCorrection> {
    let mut applied = Vec::new();

    for rule in rules {
        for (index, record) in registry.records_mut().iter_mut().enumerate() {
            if !rule.matches(record) {
                continue;
            }

            let previous = record
                .field_str(rule.set_field)
                .unwrap_or_default()
                .to_string();
            record.set_field(rule.set_field, rule.set_value);

            tracing::info!(
                record = %record.describe(index),
                field = rule.set_field,
                previous = %previous,
                updated = rule.set_value,
                "Corrected record"
            );

            applied.push(AppliedCorrection {
                progress: rule.progress.to_string(),
                description: rule.description.to_string(),
                field: rule.set_field.to_string(),
                previous,
                updated: rule.set_value.to_string(),
            });
        }
    }

    applied
}
