use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Ecosystem health category reported for a research station.
///
/// The map collaborator maps these to marker colors; the data layer only
/// carries the category.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcosystemStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
}

impl EcosystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EcosystemStatus::Excellent => "excellent",
            EcosystemStatus::Good => "good",
            EcosystemStatus::Moderate => "moderate",
            EcosystemStatus::Poor => "poor",
            EcosystemStatus::Critical => "critical",
        }
    }

    fn parse(s: &str) -> Option<EcosystemStatus> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Some(EcosystemStatus::Excellent),
            "good" => Some(EcosystemStatus::Good),
            "moderate" => Some(EcosystemStatus::Moderate),
            "poor" => Some(EcosystemStatus::Poor),
            "critical" => Some(EcosystemStatus::Critical),
            _ => None,
        }
    }
}

/// A fixed marine research station shown on the coastal map.
///
/// Parallel to the derived [`crate::location::SamplingLocation`], this
/// struct holds curated metadata for the monitoring stations along the
/// Norwegian coast and the UK–Norway / Iceland corridors.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ResearchStation {
    /// Human-readable station name (e.g., "Bergen Fjord Research")
    pub name: String,
    /// Key of the region whose dashboards feature this station
    pub region: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Mean water temperature in °C
    pub temp_c: f64,
    /// Ecosystem health category
    pub status: EcosystemStatus,
    /// Sampling depth in meters
    pub depth_m: i32,
    /// Key species observed at the station
    pub species: String,
}

impl ResearchStation {
    /// Parse a CSV string of station data into a vector of ResearchStations.
    ///
    /// Expected CSV columns: name, region, lat, lon, temp_c, status, depth_m, species
    pub fn parse_station_csv(csv_object: &str) -> Result<Vec<ResearchStation>> {
        let mut station_list: Vec<ResearchStation> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = String::from(record.get(0).expect("name parse fail"));
            let region = String::from(record.get(1).expect("region parse fail"));
            let lat = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let lon = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let temp_c = record
                .get(4)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let status = record
                .get(5)
                .and_then(EcosystemStatus::parse)
                .unwrap_or(EcosystemStatus::Moderate);
            let depth_m = record
                .get(6)
                .unwrap_or("0")
                .trim()
                .parse::<i32>()
                .unwrap_or(0);
            let species = String::from(record.get(7).unwrap_or(""));
            station_list.push(ResearchStation {
                name,
                region,
                lat,
                lon,
                temp_c,
                status,
                depth_m,
                species,
            });
        }
        Ok(station_list)
    }
}

#[cfg(test)]
mod tests {
    use super::{EcosystemStatus, ResearchStation};

    #[test]
    fn test_parse_station_csv() {
        let csv_data = "\
name,region,lat,lon,temp_c,status,depth_m,species
Stavanger Marine Station,norwegian-coast,58.8,5.2,8.5,excellent,85,\"Cod, Herring, Mackerel\"
North Sea Corridor,north-sea,70.5,-2.1,7.8,good,120,\"Haddock, Plaice, Sand Eel\"
";
        let stations = ResearchStation::parse_station_csv(csv_data).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Stavanger Marine Station");
        assert_eq!(stations[0].region, "norwegian-coast");
        assert!((stations[0].lat - 58.8).abs() < f64::EPSILON);
        assert_eq!(stations[0].status, EcosystemStatus::Excellent);
        assert_eq!(stations[0].depth_m, 85);
        assert_eq!(stations[1].status, EcosystemStatus::Good);
        assert!((stations[1].lon - (-2.1)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_status_defaults_to_moderate() {
        let csv_data = "\
name,region,lat,lon,temp_c,status,depth_m,species
Mystery Buoy,north-sea,60.0,1.0,7.0,pristine,50,Krill
";
        let stations = ResearchStation::parse_station_csv(csv_data).unwrap();
        assert_eq!(stations[0].status, EcosystemStatus::Moderate);
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv_data = "name,region,lat,lon,temp_c,status,depth_m,species\n";
        let stations = ResearchStation::parse_station_csv(csv_data).unwrap();
        assert_eq!(stations.len(), 0);
    }
}
