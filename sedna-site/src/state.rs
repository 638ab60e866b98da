//! The selection a dashboard is derived from.
//!
//! Selections live only as long as the page; nothing is persisted.
//! Changing any field simply means re-deriving the payload from the
//! catalog.

use sedna_data::{DEFAULT_REGION, DEFAULT_YEAR};
use sedna_effort::filter::{MonthFilter, VesselFilter};

/// Current UI selection across the dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected region key
    pub region: String,
    /// Selected year key
    pub year: String,
    /// Month filter (defaults to "All Months")
    pub month: MonthFilter,
    /// Vessel filter (defaults to "All Vessels")
    pub vessel: VesselFilter,
    /// Station display name picked on the map, if any
    pub station: Option<String>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection {
            region: DEFAULT_REGION.to_string(),
            year: DEFAULT_YEAR.to_string(),
            month: MonthFilter::All,
            vessel: VesselFilter::All,
            station: None,
        }
    }

    /// Apply a station pick coming in from the map layer.
    pub fn select_station(&mut self, station_display_name: &str) {
        self.station = Some(station_display_name.to_string());
    }

    pub fn clear_station(&mut self) {
        self.station = None;
    }
}

impl Default for Selection {
    fn default() -> Selection {
        Selection::new()
    }
}
