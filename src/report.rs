//! Operator-facing run report.
//!
//! Everything here renders to plain strings; `run` decides when each block
//! is printed so the console order tracks the step order, and a failure
//! late in the run still leaves the earlier blocks on screen.

use serde::Serialize;

use crate::corrections::{AppliedCorrection, DuplicateReport};
use crate::db::{DatabaseError, HospitalRegistry};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Aggregate counts for the final stats block.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub total_hospitals: usize,
    pub washington: usize,
    pub idaho: usize,
    pub alaska: usize,
}

/// Outcome of one corrector run, returned after the registry is rewritten.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub corrections: Vec<AppliedCorrection>,
    pub duplicates: DuplicateReport,
    pub stats: RegistryStats,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Compute the final stats block. Every record must carry `state`, so this
/// can fail on a registry the corrections and the duplicate scan accepted.
pub fn registry_stats(registry: &HospitalRegistry) -> Result<RegistryStats, DatabaseError> {
    Ok(RegistryStats {
        total_hospitals: registry.len(),
        washington: registry.count_in_state("WA")?,
        idaho: registry.count_in_state("ID")?,
        alaska: registry.count_in_state("AK")?,
    })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Checkmark progress line for one applied correction.
pub fn render_correction(correction: &AppliedCorrection) -> String {
    format!("✓ {}", correction.progress)
}

/// Warning block listing duplicate ids, or the all-clear line.
pub fn render_duplicates(report: &DuplicateReport) -> String {
    if report.is_clean() {
        return "\n✓ No duplicate CMS IDs found".to_string();
    }

    let mut out = String::from("\n⚠ WARNING: Duplicate CMS IDs still exist:");
    for dup in &report.duplicates {
        out.push_str(&format!("\n  {}: {:?}", dup.cms_id, dup.names));
    }
    out
}

pub fn render_saved() -> &'static str {
    "\n✓ Saved corrected database"
}

/// Count of corrections applied, with one FIXED line item each.
pub fn render_corrections_summary(corrections: &[AppliedCorrection]) -> String {
    let mut out = format!("\nTotal corrections made: {}", corrections.len());
    for correction in corrections {
        out.push_str(&format!("\n  - FIXED: {}", correction.description));
    }
    out
}

pub fn render_stats(stats: &RegistryStats) -> String {
    format!(
        "\nFinal stats:\n  Total hospitals: {}\n  Washington: {}\n  Idaho: {}\n  Alaska: {}",
        stats.total_hospitals, stats.washington, stats.idaho, stats.alaska
    )
}
