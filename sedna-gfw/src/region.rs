use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A study region with its own bundled effort datasets and map framing.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Stable key used in dataset file names and UI selection (e.g.
    /// "norwegian-coast")
    pub key: String,
    /// Display name shown in the region selector
    pub name: String,
    /// Initial map center latitude
    pub center_lat: f64,
    /// Initial map center longitude
    pub center_lon: f64,
    /// Initial map zoom level
    pub zoom: u8,
}

impl Region {
    /// Parse a CSV string of region metadata into a vector of Regions.
    ///
    /// Expected CSV columns: key, name, center_lat, center_lon, zoom
    pub fn parse_region_csv(csv_object: &str) -> Result<Vec<Region>> {
        let mut region_list: Vec<Region> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let key = String::from(record.get(0).expect("key parse fail"));
            let name = String::from(record.get(1).expect("name parse fail"));
            let center_lat = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let center_lon = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let zoom = record
                .get(4)
                .unwrap_or("4")
                .trim()
                .parse::<u8>()
                .unwrap_or(4);
            region_list.push(Region {
                key,
                name,
                center_lat,
                center_lon,
                zoom,
            });
        }
        Ok(region_list)
    }
}
