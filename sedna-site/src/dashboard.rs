//! One parameterized dashboard instead of parallel page copies.
//!
//! Earlier iterations of the site accumulated near-identical page
//! variants (hero + map + data sections with small differences). Here a
//! variant is just a configuration: which dataset it opens on, which
//! hero copy it shows, whether the map toggle is rendered. One builder
//! derives the full payload for any variant from the current selection.

use serde::Serialize;

use sedna_data::{region_vector, stations_for_region, EffortCatalog, DEFAULT_REGION};
use sedna_effort::models::{SeasonCard, StationMarker};
use sedna_effort::query;
use sedna_gfw::location::SamplingLocation;
use sedna_gfw::region::Region;
use sedna_gfw::station::ResearchStation;

use crate::content;
use crate::sources::{DataSource, DATA_SOURCES};
use crate::state::Selection;

/// The recognized page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    /// Landing page: hero, mission, sources, effort dashboard with map.
    EffortDashboard,
    /// Standalone map page reached from the hero navigation.
    MapPage,
}

impl DashboardVariant {
    pub const ALL: [DashboardVariant; 2] =
        [DashboardVariant::EffortDashboard, DashboardVariant::MapPage];

    pub fn key(&self) -> &'static str {
        match self {
            DashboardVariant::EffortDashboard => "effort-dashboard",
            DashboardVariant::MapPage => "map-page",
        }
    }

    pub fn config(&self) -> DashboardConfig {
        match self {
            DashboardVariant::EffortDashboard => DashboardConfig {
                variant: *self,
                region: DEFAULT_REGION,
                hero_title: content::HERO_TITLE,
                hero_tagline: content::HERO_TAGLINE,
                show_map_toggle: true,
                show_mission: true,
            },
            DashboardVariant::MapPage => DashboardConfig {
                variant: *self,
                region: DEFAULT_REGION,
                hero_title: content::HERO_TITLE,
                hero_tagline: "Marine research stations and fishing effort across the study area",
                show_map_toggle: false,
                show_mission: false,
            },
        }
    }
}

/// Everything that distinguishes one page variant from another.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub variant: DashboardVariant,
    /// Region the variant opens on
    pub region: &'static str,
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    /// Whether the dashboard renders its map show/hide toggle
    pub show_map_toggle: bool,
    /// Whether the mission and sources sections are included
    pub show_mission: bool,
}

impl DashboardConfig {
    /// The selection this variant starts from before any user input.
    pub fn initial_selection(&self) -> Selection {
        Selection {
            region: self.region.to_string(),
            ..Selection::new()
        }
    }
}

/// The full serializable payload the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub variant: &'static str,
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub show_map_toggle: bool,
    pub region: Region,
    pub year: String,
    pub target: &'static str,
    pub cards: Vec<SeasonCard>,
    pub locations: Vec<SamplingLocation>,
    pub vessels: Vec<String>,
    pub markers: Vec<StationMarker>,
    pub research_stations: Vec<ResearchStation>,
    pub mission_heading: Option<&'static str>,
    pub mission_intro: Option<&'static str>,
    pub mission_cards: Vec<content::MissionCard>,
    pub sources: Vec<DataSource>,
}

/// Derive the payload for a variant from the current selection.
pub fn build_dashboard(
    catalog: &EffortCatalog,
    config: &DashboardConfig,
    selection: &Selection,
) -> DashboardPayload {
    let base = catalog.records(&selection.region, &selection.year);
    let selected = query::select_records(base, &selection.month, &selection.vessel);

    let cards: Vec<SeasonCard> = match &selection.station {
        Some(station) => query::station_seasonal_effort(&selected, station)
            .iter()
            .map(SeasonCard::from)
            .collect(),
        None => query::season_cards(&selected),
    };

    let region = region_vector()
        .into_iter()
        .find(|r| r.key == selection.region)
        .unwrap_or_else(|| {
            region_vector()
                .into_iter()
                .find(|r| r.key == DEFAULT_REGION)
                .expect("default region metadata is always embedded")
        });

    DashboardPayload {
        variant: config.variant.key(),
        hero_title: config.hero_title,
        hero_tagline: config.hero_tagline,
        show_map_toggle: config.show_map_toggle,
        research_stations: stations_for_region(&region.key),
        region,
        year: selection.year.clone(),
        target: content::target_label(&selection.year),
        cards,
        locations: query::unique_locations(&selected),
        vessels: query::unique_vessel_ids(&selected),
        markers: query::station_markers(&selected),
        mission_heading: config.show_mission.then_some(content::MISSION_HEADING),
        mission_intro: config.show_mission.then_some(content::MISSION_INTRO),
        mission_cards: if config.show_mission {
            content::MISSION_CARDS.to_vec()
        } else {
            Vec::new()
        },
        sources: if config.show_mission {
            DATA_SOURCES.to_vec()
        } else {
            Vec::new()
        },
    }
}
