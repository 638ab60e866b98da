use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GfwError, Result};

/// Date format for the start of a record's monthly period: "YYYY-MM-01"
pub const PERIOD_FORMAT: &str = "%Y-%m-%d";

/// A single apparent-fishing-effort record from a Global Fishing Watch
/// export. The JSON key names are a fixed schema contract; exports are
/// bundled per (region, year) and loaded read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortRecord {
    /// Year-month period key, e.g. "2023-03". The second `-`-separated
    /// component is always the zero-padded month.
    #[serde(rename = "Time Range")]
    pub time_range: String,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
    /// Apparent effort for the period at this point, in hours.
    #[serde(rename = "Apparent Fishing Hours")]
    pub fishing_hours: f64,
    /// Vessel identifier; exports carry it as a number or a numeric
    /// string, normalized to text here.
    #[serde(rename = "Vessel IDs", deserialize_with = "vessel_id_as_string")]
    pub vessel_id: String,
}

fn vessel_id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        Raw::Float(f) => f.to_string(),
        Raw::Text(s) => s,
    })
}

impl EffortRecord {
    /// The zero-padded two-digit month of this record's period, taken
    /// from the second `-`-separated component of the time range.
    pub fn month_key(&self) -> Option<&str> {
        self.time_range.split('-').nth(1)
    }

    /// First day of this record's monthly period.
    pub fn period_start(&self) -> Option<NaiveDate> {
        let mut parts = self.time_range.split('-');
        let year = parts.next()?;
        let month = parts.next()?;
        NaiveDate::parse_from_str(&format!("{year}-{month}-01"), PERIOD_FORMAT).ok()
    }

    /// Parse a bundled JSON export (an array of records) into a vector.
    ///
    /// Every record must carry a month component in its time range; a
    /// record without one means the export itself is malformed.
    pub fn parse_records(json: &str) -> Result<Vec<EffortRecord>> {
        let records: Vec<EffortRecord> = serde_json::from_str(json)?;
        for record in &records {
            match record.month_key() {
                Some(month) if month.len() == 2 => {}
                _ => return Err(GfwError::MissingMonth(record.time_range.clone())),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::EffortRecord;
    use crate::error::GfwError;

    const STR_RESULT: &str = r#"[
        {"Time Range": "2023-03", "Lat": 58.84, "Lon": 5.21, "Apparent Fishing Hours": 112.5, "Vessel IDs": 7},
        {"Time Range": "2023-04", "Lat": 60.12, "Lon": 5.83, "Apparent Fishing Hours": 86.0, "Vessel IDs": "12"},
        {"Time Range": "2023-12", "Lat": 61.20, "Lon": 4.95, "Apparent Fishing Hours": 0.0, "Vessel IDs": 3.0}
    ]"#;

    #[test]
    fn test_parse_records() {
        let records = EffortRecord::parse_records(STR_RESULT).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].time_range, "2023-03");
        assert!((records[0].fishing_hours - 112.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vessel_id_normalization() {
        let records = EffortRecord::parse_records(STR_RESULT).unwrap();
        // number, numeric string, and whole float all normalize to text
        assert_eq!(records[0].vessel_id, "7");
        assert_eq!(records[1].vessel_id, "12");
        assert_eq!(records[2].vessel_id, "3");
    }

    #[test]
    fn test_month_key() {
        let records = EffortRecord::parse_records(STR_RESULT).unwrap();
        assert_eq!(records[0].month_key(), Some("03"));
        assert_eq!(records[2].month_key(), Some("12"));
    }

    #[test]
    fn test_period_start() {
        let records = EffortRecord::parse_records(STR_RESULT).unwrap();
        let start = records[0].period_start().unwrap();
        assert_eq!(start.to_string(), "2023-03-01");
    }

    #[test]
    fn test_missing_month_is_rejected() {
        let json = r#"[{"Time Range": "2023", "Lat": 0.0, "Lon": 0.0, "Apparent Fishing Hours": 1.0, "Vessel IDs": 1}]"#;
        match EffortRecord::parse_records(json) {
            Err(GfwError::MissingMonth(range)) => assert_eq!(range, "2023"),
            other => panic!("expected MissingMonth, got {other:?}"),
        }
    }
}
