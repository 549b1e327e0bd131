//! Registry load/save plus whole-file counts.
//!
//! The registry is one JSON array of hospital records, read wholesale into
//! memory and written wholesale back to the same path. Record order is
//! insertion order from the file; nothing here reorders or drops records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::HospitalRecord;

use super::DatabaseError;

/// The in-memory hospital database.
#[derive(Debug, Clone)]
pub struct HospitalRegistry {
    records: Vec<HospitalRecord>,
}

impl HospitalRegistry {
    /// Build a registry from records already in memory (tests, mostly).
    pub fn from_records(records: Vec<HospitalRecord>) -> Self {
        Self { records }
    }

    /// Load the registry from a JSON array file.
    ///
    /// Logs the load figures the map front-end also reports: total records,
    /// geocoded records, advanced (CSC/TSC) centers and EVT centers.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatabaseError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<HospitalRecord> =
            serde_json::from_str(&raw).map_err(|source| DatabaseError::Malformed {
                path: path.display().to_string(),
                source,
            })?;

        let registry = Self { records };
        tracing::info!(
            total = registry.len(),
            geocoded = registry.geocoded_count(),
            advanced_centers = registry.advanced_center_count(),
            evt_centers = registry.evt_center_count(),
            "Registry loaded"
        );
        Ok(registry)
    }

    /// Write the registry back, pretty-printed with 2-space indentation.
    /// This is a destructive in-place update: same path, no backup copy.
    pub fn save(&self, path: &Path) -> Result<(), DatabaseError> {
        let file = File::create(path).map_err(|source| DatabaseError::Write {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records).map_err(|source| {
            DatabaseError::Serialize {
                path: path.display().to_string(),
                source,
            }
        })?;
        writer.flush().map_err(|source| DatabaseError::Write {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(records = self.len(), path = %path.display(), "Registry saved");
        Ok(())
    }

    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    /// Mutable view of the records. A slice on purpose: the corrector
    /// rewrites fields but never adds or removes records.
    pub fn records_mut(&mut self) -> &mut [HospitalRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records the map can actually plot (both coordinates present).
    pub fn geocoded_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_coordinates()).count()
    }

    /// CSC/TSC sites.
    pub fn advanced_center_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_advanced_center()).count()
    }

    /// Thrombectomy-capable sites.
    pub fn evt_center_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_elvo()).count()
    }

    /// Count records in one state. Every record must carry `state`; the
    /// first one without it fails the count.
    pub fn count_in_state(&self, state: &str) -> Result<usize, DatabaseError> {
        let mut count = 0;
        for (index, record) in self.records.iter().enumerate() {
            let record_state = record.state().ok_or_else(|| DatabaseError::MissingField {
                record: record.describe(index),
                field: "state".into(),
            })?;
            if record_state == state {
                count += 1;
            }
        }
        Ok(count)
    }
}
