use serde::Serialize;

/// A sampling location derived from the effort records currently in view.
///
/// Identity is the coordinate pair rounded to two decimals; the display
/// name rounds to one decimal. The two precisions are intentionally
/// different and must not be interchanged: locations distinct at two
/// decimals can share a display name, and station filtering matches on
/// the display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingLocation {
    /// Latitude rounded to two decimals.
    pub lat: f64,
    /// Longitude rounded to two decimals.
    pub lon: f64,
    /// Human-readable name, e.g. "Station 58.8, 5.2".
    pub name: String,
}

impl SamplingLocation {
    /// Derive the location owning the given record coordinates.
    pub fn from_point(lat: f64, lon: f64) -> SamplingLocation {
        SamplingLocation {
            lat: round2(lat),
            lon: round2(lon),
            name: SamplingLocation::display_name(lat, lon),
        }
    }

    /// Display name at one-decimal precision.
    pub fn display_name(lat: f64, lon: f64) -> String {
        format!("Station {lat:.1}, {lon:.1}")
    }

    /// Dedup key at two-decimal precision.
    pub fn dedup_key(lat: f64, lon: f64) -> String {
        format!("{lat:.2},{lon:.2}")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
