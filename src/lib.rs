pub mod config;
pub mod models;
pub mod db;
pub mod corrections;
pub mod report;

use std::path::Path;

use db::{DatabaseError, HospitalRegistry};
use report::RunSummary;

/// Run the record corrector against the registry at `path`.
///
/// Steps, in order: load, apply the correction table, scan for duplicate
/// CMS IDs, write the registry back in place, print the summary. The write
/// happens before the stats step on purpose: a record missing its `state`
/// field fails the run, but by then the corrected file is already on disk.
/// A failure in the duplicate scan, by contrast, leaves the file untouched.
pub fn run(path: &Path) -> Result<RunSummary, DatabaseError> {
    let mut registry = HospitalRegistry::load(path)?;

    let corrections = corrections::apply_corrections(&mut registry);
    for correction in &corrections {
        println!("{}", report::render_correction(correction));
    }

    let duplicates = corrections::find_duplicate_cms_ids(&registry)?;
    println!("{}", report::render_duplicates(&duplicates));

    registry.save(path)?;
    println!("{}", report::render_saved());

    println!("{}", report::render_corrections_summary(&corrections));

    let stats = report::registry_stats(&registry)?;
    println!("{}", report::render_stats(&stats));

    Ok(RunSummary {
        corrections,
        duplicates,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn seed() -> serde_json::Value {
        json!([
            {
                "name": "ISLAND HOSPITAL",
                "cmsId": "500007",
                "state": "WA",
                "city": "Anacortes",
                "latitude": 48.489,
                "longitude": -122.618
            },
            {
                "name": "MULTICARE ALLENMORE HOSPITAL",
                "cmsId": "500007",
                "state": "WA",
                "city": "Tacoma"
            },
            {
                "name": "ST JOSEPH HOSPITAL",
                "cmsId": "500030",
                "state": "WA",
                "city": "Bellingham"
            },
            { "name": "KOOTENAI HEALTH", "cmsId": "130002", "state": "ID" },
            { "name": "ALASKA REGIONAL HOSPITAL", "cmsId": "020001", "state": "AK" },
            { "name": "NEW RURAL CLINIC", "cmsId": "None", "state": "WA" }
        ])
    }

    fn write_registry(dir: &tempfile::TempDir, records: &serde_json::Value) -> PathBuf {
        let path = dir.path().join("complete_hospitals_geocoded.json");
        std::fs::write(&path, serde_json::to_string_pretty(records).unwrap()).unwrap();
        path
    }

    #[test]
    fn one_run_fixes_both_records_and_clears_the_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_registry(&dir, &seed());

        let summary = run(&path).unwrap();

        assert_eq!(summary.corrections.len(), 2);
        assert!(summary.duplicates.is_clean());

        let reloaded = HospitalRegistry::load(&path).unwrap();
        assert_eq!(reloaded.records()[1].cms_id(), Some("500129"));
        assert_eq!(
            reloaded.records()[2].name(),
            Some("PEACEHEALTH ST JOSEPH MEDICAL CENTER")
        );
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_registry(&dir, &seed());

        run(&path).unwrap();
        let after_first = std::fs::read_to_string(&path).unwrap();

        let summary = run(&path).unwrap();
        let after_second = std::fs::read_to_string(&path).unwrap();

        assert!(summary.corrections.is_empty());
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn only_targeted_records_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_registry(&dir, &seed());

        let before = HospitalRegistry::load(&path).unwrap();
        run(&path).unwrap();
        let after = HospitalRegistry::load(&path).unwrap();

        for (index, (b, a)) in before.records().iter().zip(after.records()).enumerate() {
            match index {
                // Allenmore: only cmsId changed.
                1 => {
                    assert_eq!(a.cms_id(), Some("500129"));
                    assert_eq!(a.name(), b.name());
                    assert_eq!(a.state(), b.state());
                    assert_eq!(a.field_str("city"), b.field_str("city"));
                }
                // St Joseph: only name changed.
                2 => {
                    assert_eq!(a.name(), Some("PEACEHEALTH ST JOSEPH MEDICAL CENTER"));
                    assert_eq!(a.cms_id(), b.cms_id());
                    assert_eq!(a.state(), b.state());
                }
                _ => assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn record_and_state_counts_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_registry(&dir, &seed());

        let before = HospitalRegistry::load(&path).unwrap();
        let counts_before = (
            before.len(),
            before.count_in_state("WA").unwrap(),
            before.count_in_state("ID").unwrap(),
            before.count_in_state("AK").unwrap(),
        );

        let summary = run(&path).unwrap();

        let after = HospitalRegistry::load(&path).unwrap();
        assert_eq!(after.len(), counts_before.0);
        assert_eq!(after.count_in_state("WA").unwrap(), counts_before.1);
        assert_eq!(after.count_in_state("ID").unwrap(), counts_before.2);
        assert_eq!(after.count_in_state("AK").unwrap(), counts_before.3);

        assert_eq!(summary.stats.total_hospitals, 6);
        assert_eq!(summary.stats.washington, 4);
        assert_eq!(summary.stats.idaho, 1);
        assert_eq!(summary.stats.alaska, 1);
    }

    #[test]
    fn surviving_duplicates_are_reported_and_the_file_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let records = json!([
            {
                "name": "MULTICARE ALLENMORE HOSPITAL",
                "cmsId": "500007",
                "state": "WA"
            },
            { "name": "FIRST TWIN", "cmsId": "999999", "state": "WA" },
            { "name": "SECOND TWIN", "cmsId": "999999", "state": "ID" }
        ]);
        let path = write_registry(&dir, &records);

        let summary = run(&path).unwrap();

        assert_eq!(summary.duplicates.duplicates.len(), 1);
        assert_eq!(summary.duplicates.duplicates[0].cms_id, "999999");
        assert_eq!(
            summary.duplicates.duplicates[0].names,
            vec!["FIRST TWIN", "SECOND TWIN"]
        );

        // The write still happened, corrections included.
        let reloaded = HospitalRegistry::load(&path).unwrap();
        assert_eq!(reloaded.records()[0].cms_id(), Some("500129"));
    }

    #[test]
    fn registry_without_the_target_records_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let records = json!([
            { "name": "KOOTENAI HEALTH", "cmsId": "130002", "state": "ID" },
            { "name": "ALASKA REGIONAL HOSPITAL", "cmsId": "020001", "state": "AK" }
        ]);
        let path = write_registry(&dir, &records);

        let before = HospitalRegistry::load(&path).unwrap();
        let summary = run(&path).unwrap();
        let after = HospitalRegistry::load(&path).unwrap();

        assert!(summary.corrections.is_empty());
        assert_eq!(before.records(), after.records());
    }

    #[test]
    fn missing_state_fails_after_the_corrected_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let records = json!([
            {
                "name": "MULTICARE ALLENMORE HOSPITAL",
                "cmsId": "500007",
                "state": "WA"
            },
            { "name": "STATELESS CLINIC", "cmsId": "777777" }
        ]);
        let path = write_registry(&dir, &records);

        let err = run(&path).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::MissingField { ref field, .. } if field == "state"
        ));

        // The fix is already persisted; only the stats step failed.
        let reloaded = HospitalRegistry::load(&path).unwrap();
        assert_eq!(reloaded.records()[0].cms_id(), Some("500129"));
    }

    #[test]
    fn missing_name_on_a_tracked_record_fails_before_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let records = json!([
            {
                "name": "MULTICARE ALLENMORE HOSPITAL",
                "cmsId": "500007",
                "state": "WA"
            },
            { "cmsId": "777777", "state": "WA" }
        ]);
        let path = write_registry(&dir, &records);
        let original = std::fs::read_to_string(&path).unwrap();

        let err = run(&path).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::MissingField { ref field, .. } if field == "name"
        ));

        // Pre-image intact: the scan failed before the save step.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
