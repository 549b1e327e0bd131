use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel string meaning "no CMS ID assigned". Records carrying it are
/// excluded from the duplicate index, together with absent and empty ids.
pub const CMS_ID_PLACEHOLDER: &str = "None";

/// One hospital record, held as the ordered JSON object it was loaded from.
///
/// The corrector understands a handful of fields; everything else passes
/// through untouched and keeps its position in the object. Overwriting a
/// known field keeps its position too (`serde_json::Map` with
/// `preserve_order` replaces in place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HospitalRecord(Map<String, Value>);

impl HospitalRecord {
    /// Borrow a field as a string. `None` when absent or not a JSON string.
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Facility name, uppercase by convention.
    pub fn name(&self) -> Option<&str> {
        self.field_str("name")
    }

    /// Raw CMS certification number, placeholder included.
    pub fn cms_id(&self) -> Option<&str> {
        self.field_str("cmsId")
    }

    /// Two-letter state code.
    pub fn state(&self) -> Option<&str> {
        self.field_str("state")
    }

    /// CMS ID as seen by the duplicate index: absent, empty and the
    /// `"None"` placeholder all mean "no identifier assigned".
    pub fn tracked_cms_id(&self) -> Option<&str> {
        match self.cms_id() {
            None | Some("") | Some(CMS_ID_PLACEHOLDER) => None,
            Some(id) => Some(id),
        }
    }

    /// Overwrite a field with a string value, appending when new.
    pub fn set_field(&mut self, field: &str, value: &str) {
        self.0
            .insert(field.to_string(), Value::String(value.to_string()));
    }

    /// True when both coordinates carry a numeric value.
    pub fn has_coordinates(&self) -> bool {
        self.numeric_field("latitude") && self.numeric_field("longitude")
    }

    /// Stroke certification tier (CSC, TSC, PSC, ASR) when certified.
    pub fn stroke_certification(&self) -> Option<&str> {
        self.field_str("strokeCertificationType")
    }

    /// CSC and TSC sites, the tiers that can take transfer-in stroke cases.
    pub fn is_advanced_center(&self) -> bool {
        matches!(self.stroke_certification(), Some("CSC") | Some("TSC"))
    }

    /// True for EVT-capable (thrombectomy) centers.
    pub fn has_elvo(&self) -> bool {
        self.0
            .get("hasELVO")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Identify a record in errors and logs: `#index 'NAME'`, or `#index`
    /// when the record has no usable name.
    pub fn describe(&self, index: usize) -> String {
        match self.name() {
            Some(name) => format!("#{index} '{name}'"),
            None => format!("#{index}"),
        }
    }

    /// The underlying ordered field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn numeric_field(&self, field: &str) -> bool {
        self.0.get(field).and_then(Value::as_f64).is_some()
    }
}
