//! Bundled effort datasets for the sEaDNA dashboards.
//!
//! One Global Fishing Watch export is bundled per (region, year) pair at
//! build time; there is no fetch path and no write path. The catalog is
//! the single lookup point for every dashboard and CLI query, and it
//! never fails a lookup: an unknown key falls back to the default
//! dataset, mirroring how the site always has something to render.

use std::collections::HashMap;

use sedna_gfw::effort::EffortRecord;
use sedna_gfw::error::Result;
use sedna_gfw::region::Region;
use sedna_gfw::station::ResearchStation;

/// Region key of the fallback dataset.
pub const DEFAULT_REGION: &str = "norwegian-coast";
/// Year key of the fallback dataset.
pub const DEFAULT_YEAR: &str = "2023";

static REGIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/regions.csv"));
static STATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/stations.csv"));

/// Every bundled export, keyed (region, year) in the order the site
/// lists them.
const BUNDLED: [(&str, &str, &str); 6] = [
    (
        "norwegian-coast",
        "2021",
        include_str!(concat!(env!("OUT_DIR"), "/effort-norwegian-coast-2021.json")),
    ),
    (
        "norwegian-coast",
        "2022",
        include_str!(concat!(env!("OUT_DIR"), "/effort-norwegian-coast-2022.json")),
    ),
    (
        "norwegian-coast",
        "2023",
        include_str!(concat!(env!("OUT_DIR"), "/effort-norwegian-coast-2023.json")),
    ),
    (
        "north-sea",
        "2021",
        include_str!(concat!(env!("OUT_DIR"), "/effort-north-sea-2021.json")),
    ),
    (
        "north-sea",
        "2022",
        include_str!(concat!(env!("OUT_DIR"), "/effort-north-sea-2022.json")),
    ),
    (
        "north-sea",
        "2023",
        include_str!(concat!(env!("OUT_DIR"), "/effort-north-sea-2023.json")),
    ),
];

/// All bundled effort datasets, keyed by (region, year).
pub struct EffortCatalog {
    datasets: HashMap<(String, String), Vec<EffortRecord>>,
}

impl EffortCatalog {
    /// Parse every bundled export into memory.
    pub fn load() -> Result<EffortCatalog> {
        let mut datasets = HashMap::new();
        for (region, year, json) in BUNDLED {
            let records = EffortRecord::parse_records(json)?;
            log::info!(
                "[sEaDNA Debug] catalog: loaded {} records for {}/{}",
                records.len(),
                region,
                year
            );
            datasets.insert((region.to_string(), year.to_string()), records);
        }
        Ok(EffortCatalog { datasets })
    }

    /// The base record collection for a (region, year) selection.
    ///
    /// An unknown key silently yields the default dataset; the site never
    /// renders an empty dashboard because of a stale or mistyped key.
    pub fn records(&self, region: &str, year: &str) -> &[EffortRecord] {
        let key = (region.to_string(), year.to_string());
        if let Some(records) = self.datasets.get(&key) {
            return records;
        }
        log::warn!(
            "[sEaDNA Debug] catalog: no dataset for {}/{}, falling back to {}/{}",
            region,
            year,
            DEFAULT_REGION,
            DEFAULT_YEAR
        );
        self.datasets
            .get(&(DEFAULT_REGION.to_string(), DEFAULT_YEAR.to_string()))
            .map(Vec::as_slice)
            .expect("default dataset is always bundled")
    }

    pub fn contains(&self, region: &str, year: &str) -> bool {
        self.datasets
            .contains_key(&(region.to_string(), year.to_string()))
    }

    /// Every bundled (region, year) key, sorted for stable listings.
    pub fn keys(&self) -> Vec<(String, String)> {
        let mut keys: Vec<(String, String)> = self.datasets.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Get the region vector from the embedded metadata CSV.
pub fn region_vector() -> Vec<Region> {
    if let Ok(r) = Region::parse_region_csv(REGIONS_CSV) {
        r
    } else {
        panic!("failed to parse regions csv")
    }
}

/// Get the research-station vector from the embedded metadata CSV.
pub fn station_vector() -> Vec<ResearchStation> {
    if let Ok(s) = ResearchStation::parse_station_csv(STATIONS_CSV) {
        s
    } else {
        panic!("failed to parse stations csv")
    }
}

/// Research stations featured on a region's map page.
pub fn stations_for_region(region: &str) -> Vec<ResearchStation> {
    station_vector()
        .into_iter()
        .filter(|station| station.region == region)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        region_vector, station_vector, stations_for_region, EffortCatalog, DEFAULT_REGION,
        DEFAULT_YEAR,
    };

    #[test]
    fn catalog_loads_all_bundled_datasets() {
        let catalog = EffortCatalog::load().unwrap();
        assert_eq!(catalog.keys().len(), 6);
        for (region, year) in catalog.keys() {
            assert!(
                !catalog.records(&region, &year).is_empty(),
                "dataset {region}/{year} should not be empty"
            );
        }
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let catalog = EffortCatalog::load().unwrap();
        let fallback = catalog.records("atlantis", "1999");
        let default = catalog.records(DEFAULT_REGION, DEFAULT_YEAR);
        assert_eq!(fallback, default);
        assert!(!catalog.contains("atlantis", "1999"));
    }

    #[test]
    fn records_carry_month_keys() {
        let catalog = EffortCatalog::load().unwrap();
        for record in catalog.records(DEFAULT_REGION, DEFAULT_YEAR) {
            let month = record.month_key().expect("bundled record has a month");
            assert_eq!(month.len(), 2);
        }
    }

    #[test]
    fn region_metadata_is_embedded() {
        let regions = region_vector();
        assert!(regions.iter().any(|r| r.key == "norwegian-coast"));
        assert!(regions.iter().any(|r| r.key == "north-sea"));
    }

    #[test]
    fn stations_split_by_region() {
        let all = station_vector();
        let coast = stations_for_region("norwegian-coast");
        let north_sea = stations_for_region("north-sea");
        assert_eq!(all.len(), coast.len() + north_sea.len());
        assert!(coast.iter().all(|s| s.region == "norwegian-coast"));
        assert!(!north_sea.is_empty());
    }
}
