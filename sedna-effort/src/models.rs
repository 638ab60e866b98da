//! Aggregation result models for the effort dashboards.
//!
//! All structs derive `Serialize` so payloads can be handed to the map
//! and card-rendering collaborators as JSON.

use sedna_gfw::season::Season;
use serde::Serialize;

/// Average per-record hours above which a season reads as trending up.
pub const TREND_UP_HOURS: f64 = 150.0;
/// Average per-record hours below which a season reads as trending down.
pub const TREND_DOWN_HOURS: f64 = 80.0;
/// Reference level the change percentage is measured against.
const TREND_BASELINE_HOURS: f64 = 100.0;
/// Hours per displayed percentage point.
const TREND_HOURS_PER_PERCENT: f64 = 10.0;

/// Coarse direction classification shown on season cards and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Classify an average-per-record hours figure against the fixed display
/// thresholds. The thresholds and the baseline/step pair are a display
/// heuristic carried over from the dashboards, not a domain model.
pub fn classify_trend(avg_hours: f64) -> (Trend, String) {
    if avg_hours > TREND_UP_HOURS {
        let pct = ((avg_hours - TREND_BASELINE_HOURS) / TREND_HOURS_PER_PERCENT).round() as i64;
        (Trend::Up, format!("+{pct}%"))
    } else if avg_hours < TREND_DOWN_HOURS {
        let pct = ((TREND_BASELINE_HOURS - avg_hours) / TREND_HOURS_PER_PERCENT).round() as i64;
        (Trend::Down, format!("-{pct}%"))
    } else {
        (Trend::Stable, "0%".to_string())
    }
}

/// Aggregate figures for one season bucket of the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    /// Sum of fishing hours over the bucket's records.
    pub total_hours: f64,
    /// Mean of the vessel id interpreted as a number; 0 for an empty
    /// bucket.
    pub avg_vessel_count: f64,
    pub record_count: usize,
    pub trend: Trend,
    /// Signed percentage string, e.g. "+3%".
    pub change: String,
}

/// Display form of a [`SeasonSummary`], formatted the way the dashboard
/// cards print it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonCard {
    pub season: String,
    /// e.g. "300 hrs"
    pub effort: String,
    /// e.g. "8.0 avg"
    pub vessels: String,
    pub change: String,
    pub trend: Trend,
}

impl From<&SeasonSummary> for SeasonCard {
    fn from(summary: &SeasonSummary) -> SeasonCard {
        SeasonCard {
            season: summary.season.name().to_string(),
            effort: format!("{} hrs", format_hours(summary.total_hours)),
            vessels: format!("{:.1} avg", summary.avg_vessel_count),
            change: summary.change.clone(),
            trend: summary.trend,
        }
    }
}

/// Marker payload handed to the map collaborator: position, label, a
/// scalar intensity and a categorical status. Symbol sizing, colors and
/// popups are the collaborator's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
    /// Total fishing hours observed at this location in the selection.
    pub effort_hours: f64,
    pub status: Trend,
}

/// Format an hours figure like the cards do: whole numbers print without
/// a decimal point ("300"), everything else keeps its fraction ("107.6").
pub fn format_hours(hours: f64) -> String {
    format!("{hours}")
}

#[cfg(test)]
mod tests {
    use super::{classify_trend, format_hours, SeasonCard, SeasonSummary, Trend};
    use sedna_gfw::season::Season;

    #[test]
    fn trend_boundaries() {
        // 150 is not > 150, 80 is not < 80
        assert_eq!(classify_trend(150.0), (Trend::Stable, "0%".to_string()));
        assert_eq!(classify_trend(80.0), (Trend::Stable, "0%".to_string()));
        assert_eq!(classify_trend(150.01).0, Trend::Up);
        assert_eq!(classify_trend(79.99).0, Trend::Down);
    }

    #[test]
    fn trend_change_scaling() {
        assert_eq!(classify_trend(200.0), (Trend::Up, "+10%".to_string()));
        assert_eq!(classify_trend(0.0), (Trend::Down, "-10%".to_string()));
        assert_eq!(classify_trend(175.0), (Trend::Up, "+8%".to_string()));
        assert_eq!(classify_trend(60.0), (Trend::Down, "-4%".to_string()));
    }

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hours(300.0), "300");
        assert_eq!(format_hours(107.6), "107.6");
        assert_eq!(format_hours(0.0), "0");
    }

    #[test]
    fn card_formatting() {
        let summary = SeasonSummary {
            season: Season::Spring,
            total_hours: 300.0,
            avg_vessel_count: 8.0,
            record_count: 2,
            trend: Trend::Stable,
            change: "0%".to_string(),
        };
        let card = SeasonCard::from(&summary);
        assert_eq!(card.season, "Spring");
        assert_eq!(card.effort, "300 hrs");
        assert_eq!(card.vessels, "8.0 avg");
        assert_eq!(card.change, "0%");
    }
}
