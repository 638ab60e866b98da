//! Pure query functions over a dataset's effort records.
//!
//! Callers pass the base record slice for their (region, year) selection
//! and get freshly built vectors back; nothing here holds state between
//! calls and nothing aliases back into the input.

use std::collections::HashSet;

use sedna_gfw::effort::EffortRecord;
use sedna_gfw::location::SamplingLocation;
use sedna_gfw::season::Season;

use crate::filter::{MonthFilter, VesselFilter};
use crate::models::{classify_trend, SeasonCard, SeasonSummary, StationMarker, Trend};

/// Narrow a dataset to the records matching the month and vessel
/// selection. Order-preserving, no deduplication, and a pure function of
/// its inputs: calling it twice with the same arguments yields
/// element-wise equal vectors.
pub fn select_records(
    records: &[EffortRecord],
    month: &MonthFilter,
    vessel: &VesselFilter,
) -> Vec<EffortRecord> {
    let selected: Vec<EffortRecord> = records
        .iter()
        .filter(|record| month.matches(record) && vessel.matches(record))
        .cloned()
        .collect();
    log::info!(
        "[sEaDNA Debug] query: select_records kept {} of {} records",
        selected.len(),
        records.len()
    );
    selected
}

/// The distinct sampling locations in a record set, in order of first
/// occurrence. Identity is the two-decimal coordinate key; the display
/// name uses one decimal and may repeat across distinct locations.
pub fn unique_locations(records: &[EffortRecord]) -> Vec<SamplingLocation> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut locations = Vec::new();
    for record in records {
        let key = SamplingLocation::dedup_key(record.lat, record.lon);
        if seen.insert(key) {
            locations.push(SamplingLocation::from_point(record.lat, record.lon));
        }
    }
    log::info!(
        "[sEaDNA Debug] query: unique_locations returned {} locations",
        locations.len()
    );
    locations
}

/// The distinct vessel ids in a record set, ascending by numeric value
/// (not lexically, so "3" sorts before "12").
pub fn unique_vessel_ids(records: &[EffortRecord]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut ids: Vec<String> = Vec::new();
    for record in records {
        if seen.insert(record.vessel_id.clone()) {
            ids.push(record.vessel_id.clone());
        }
    }
    ids.sort_by(|a, b| {
        let a_num = a.parse::<f64>().unwrap_or(0.0);
        let b_num = b.parse::<f64>().unwrap_or(0.0);
        a_num.total_cmp(&b_num)
    });
    log::info!(
        "[sEaDNA Debug] query: unique_vessel_ids returned {} vessels",
        ids.len()
    );
    ids
}

/// Per-season aggregates over a record set, always four entries in
/// Spring, Summer, Fall, Winter order. Every record lands in exactly one
/// bucket because the season month sets partition the year.
pub fn seasonal_effort(records: &[EffortRecord]) -> Vec<SeasonSummary> {
    let summaries: Vec<SeasonSummary> = Season::ALL
        .into_iter()
        .map(|season| {
            let bucket: Vec<&EffortRecord> = records
                .iter()
                .filter(|record| record.month_key().is_some_and(|m| season.contains(m)))
                .collect();
            summarize_bucket(season, &bucket)
        })
        .collect();
    log::info!(
        "[sEaDNA Debug] query: seasonal_effort over {} records",
        records.len()
    );
    summaries
}

/// The dashboard card form of [`seasonal_effort`].
pub fn season_cards(records: &[EffortRecord]) -> Vec<SeasonCard> {
    seasonal_effort(records).iter().map(SeasonCard::from).collect()
}

/// Per-season aggregates for one named station.
///
/// Matches records by their one-decimal display name. A name matching no
/// record falls back to the full-set aggregate, so a stale station
/// selection still renders a populated dashboard.
pub fn station_seasonal_effort(
    records: &[EffortRecord],
    station_display_name: &str,
) -> Vec<SeasonSummary> {
    let station_records: Vec<EffortRecord> = records
        .iter()
        .filter(|record| {
            SamplingLocation::display_name(record.lat, record.lon) == station_display_name
        })
        .cloned()
        .collect();
    if station_records.is_empty() {
        log::warn!(
            "[sEaDNA Debug] query: no records for station {:?}, using full set",
            station_display_name
        );
        return seasonal_effort(records);
    }
    seasonal_effort(&station_records)
}

/// One marker per distinct sampling location: position and label from
/// the location, total hours as the intensity scalar, and a status from
/// the same trend thresholds the cards use.
pub fn station_markers(records: &[EffortRecord]) -> Vec<StationMarker> {
    let markers: Vec<StationMarker> = unique_locations(records)
        .into_iter()
        .map(|location| {
            let key = SamplingLocation::dedup_key(location.lat, location.lon);
            let mut total_hours = 0.0;
            let mut count = 0usize;
            for record in records {
                if SamplingLocation::dedup_key(record.lat, record.lon) == key {
                    total_hours += record.fishing_hours;
                    count += 1;
                }
            }
            let (status, _) = if count == 0 {
                (Trend::Stable, String::new())
            } else {
                classify_trend(total_hours / count as f64)
            };
            StationMarker {
                lat: location.lat,
                lon: location.lon,
                label: location.name,
                effort_hours: total_hours,
                status,
            }
        })
        .collect();
    log::info!(
        "[sEaDNA Debug] query: station_markers returned {} markers",
        markers.len()
    );
    markers
}

fn summarize_bucket(season: Season, bucket: &[&EffortRecord]) -> SeasonSummary {
    let record_count = bucket.len();
    let total_hours: f64 = bucket.iter().map(|record| record.fishing_hours).sum();
    let avg_vessel_count = if record_count == 0 {
        0.0
    } else {
        let vessel_sum: f64 = bucket
            .iter()
            .map(|record| record.vessel_id.parse::<f64>().unwrap_or(0.0))
            .sum();
        vessel_sum / record_count as f64
    };
    // An empty bucket is a zero-valued summary, not a "down" season.
    let (trend, change) = if record_count == 0 {
        (Trend::Stable, "0%".to_string())
    } else {
        classify_trend(total_hours / record_count as f64)
    };
    SeasonSummary {
        season,
        total_hours,
        avg_vessel_count,
        record_count,
        trend,
        change,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        season_cards, seasonal_effort, select_records, station_markers, station_seasonal_effort,
        unique_locations, unique_vessel_ids,
    };
    use crate::filter::{MonthFilter, VesselFilter};
    use crate::models::Trend;
    use sedna_gfw::effort::EffortRecord;
    use sedna_gfw::location::SamplingLocation;
    use sedna_gfw::season::Season;
    use std::collections::HashSet;

    fn rec(month: &str, lat: f64, lon: f64, hours: f64, vessel: &str) -> EffortRecord {
        EffortRecord {
            time_range: format!("2023-{month}"),
            lat,
            lon,
            fishing_hours: hours,
            vessel_id: vessel.to_string(),
        }
    }

    /// One record per month across two locations, varied hours.
    fn sample_records() -> Vec<EffortRecord> {
        vec![
            rec("01", 58.84, 5.21, 40.0, "7"),
            rec("02", 58.84, 5.21, 55.0, "9"),
            rec("03", 60.12, 5.83, 120.0, "3"),
            rec("04", 60.12, 5.83, 130.0, "12"),
            rec("05", 58.84, 5.21, 140.0, "7"),
            rec("06", 58.84, 5.21, 190.0, "21"),
            rec("07", 60.12, 5.83, 210.0, "3"),
            rec("08", 58.84, 5.21, 180.0, "9"),
            rec("09", 60.12, 5.83, 110.0, "12"),
            rec("10", 58.84, 5.21, 100.0, "7"),
            rec("11", 60.12, 5.83, 90.0, "3"),
            rec("12", 58.84, 5.21, 60.0, "9"),
        ]
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let records = sample_records();
        let summaries = seasonal_effort(&records);
        assert_eq!(summaries.len(), 4);
        let bucket_total: f64 = summaries.iter().map(|s| s.total_hours).sum();
        let record_total: f64 = records.iter().map(|r| r.fishing_hours).sum();
        assert!((bucket_total - record_total).abs() < 1e-9);
        let bucket_count: usize = summaries.iter().map(|s| s.record_count).sum();
        assert_eq!(bucket_count, records.len());
    }

    #[test]
    fn summaries_follow_display_order() {
        let summaries = seasonal_effort(&sample_records());
        let seasons: Vec<Season> = summaries.iter().map(|s| s.season).collect();
        assert_eq!(
            seasons,
            vec![Season::Spring, Season::Summer, Season::Fall, Season::Winter]
        );
    }

    #[test]
    fn select_records_filters_by_zero_padded_month() {
        let records = sample_records();
        let march = select_records(
            &records,
            &MonthFilter::parse("3"),
            &VesselFilter::All,
        );
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].month_key(), Some("03"));
    }

    #[test]
    fn select_records_filters_by_vessel_id() {
        let records = sample_records();
        let vessel7 = select_records(
            &records,
            &MonthFilter::All,
            &VesselFilter::parse("7"),
        );
        assert_eq!(vessel7.len(), 3);
        assert!(vessel7.iter().all(|r| r.vessel_id == "7"));
    }

    #[test]
    fn select_records_is_idempotent() {
        let records = sample_records();
        let month = MonthFilter::parse("All Months");
        let vessel = VesselFilter::parse("9");
        let first = select_records(&records, &month, &vessel);
        let second = select_records(&records, &month, &vessel);
        assert_eq!(first, second);
    }

    #[test]
    fn unique_vessel_ids_sort_numerically() {
        let records = vec![
            rec("03", 58.84, 5.21, 10.0, "7"),
            rec("04", 58.84, 5.21, 10.0, "12"),
            rec("05", 58.84, 5.21, 10.0, "3"),
            rec("06", 58.84, 5.21, 10.0, "12"),
        ];
        let ids = unique_vessel_ids(&records);
        // lexical order would be ["12", "3", "7"]
        assert_eq!(ids, vec!["3", "7", "12"]);
        let numeric: Vec<f64> = ids.iter().map(|id| id.parse().unwrap()).collect();
        assert!(numeric.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unique_locations_dedup_at_two_decimals() {
        let records = vec![
            rec("03", 58.84, 5.21, 10.0, "7"),
            rec("04", 58.844, 5.212, 10.0, "7"), // same at 2 decimals
            rec("05", 58.85, 5.21, 10.0, "7"),   // distinct at 2 decimals
        ];
        let locations = unique_locations(&records);
        assert_eq!(locations.len(), 2);
        let keys: HashSet<String> = locations
            .iter()
            .map(|l| SamplingLocation::dedup_key(l.lat, l.lon))
            .collect();
        assert_eq!(keys.len(), locations.len());
        // insertion order of first occurrence
        assert!((locations[0].lat - 58.84).abs() < f64::EPSILON);
    }

    #[test]
    fn uniform_zero_hours_reads_as_down_ten_percent() {
        let records = vec![
            rec("03", 58.84, 5.21, 0.0, "7"),
            rec("04", 58.84, 5.21, 0.0, "9"),
            rec("05", 60.12, 5.83, 0.0, "3"),
        ];
        let spring = &seasonal_effort(&records)[0];
        assert_eq!(spring.trend, Trend::Down);
        assert_eq!(spring.change, "-10%");
    }

    #[test]
    fn uniform_two_hundred_hours_reads_as_up_ten_percent() {
        let records = vec![
            rec("06", 58.84, 5.21, 200.0, "7"),
            rec("07", 58.84, 5.21, 200.0, "9"),
        ];
        let summer = &seasonal_effort(&records)[1];
        assert_eq!(summer.trend, Trend::Up);
        assert_eq!(summer.change, "+10%");
    }

    #[test]
    fn empty_bucket_is_zero_valued_and_stable() {
        let records = vec![rec("06", 58.84, 5.21, 100.0, "7")];
        let summaries = seasonal_effort(&records);
        let spring = &summaries[0];
        assert_eq!(spring.record_count, 0);
        assert!((spring.total_hours - 0.0).abs() < f64::EPSILON);
        assert!((spring.avg_vessel_count - 0.0).abs() < f64::EPSILON);
        assert_eq!(spring.trend, Trend::Stable);
        assert_eq!(spring.change, "0%");
    }

    #[test]
    fn spring_card_for_the_reference_pair() {
        // two March records, 100 + 200 hours, vessels 7 and 9
        let records = vec![
            rec("03", 58.84, 5.21, 100.0, "7"),
            rec("03", 58.84, 5.21, 200.0, "9"),
        ];
        let cards = season_cards(&records);
        let spring = &cards[0];
        assert_eq!(spring.effort, "300 hrs");
        assert_eq!(spring.vessels, "8.0 avg");
        // average per record is exactly 150, which is not > 150
        assert_eq!(spring.trend, Trend::Stable);
        assert_eq!(spring.change, "0%");
    }

    #[test]
    fn unmatched_station_falls_back_to_full_set() {
        let records = sample_records();
        let full = seasonal_effort(&records);
        let fallback = station_seasonal_effort(&records, "Station 0.0, 0.0");
        assert_eq!(fallback, full);
    }

    #[test]
    fn matched_station_narrows_the_aggregate() {
        let records = sample_records();
        let name = SamplingLocation::display_name(58.84, 5.21);
        let station = station_seasonal_effort(&records, &name);
        let full = seasonal_effort(&records);
        assert_ne!(station, full);
        let station_total: f64 = station.iter().map(|s| s.total_hours).sum();
        let expected: f64 = records
            .iter()
            .filter(|r| SamplingLocation::display_name(r.lat, r.lon) == name)
            .map(|r| r.fishing_hours)
            .sum();
        assert!((station_total - expected).abs() < 1e-9);
    }

    #[test]
    fn markers_cover_each_location_once() {
        let records = sample_records();
        let markers = station_markers(&records);
        assert_eq!(markers.len(), unique_locations(&records).len());
        let intensity_total: f64 = markers.iter().map(|m| m.effort_hours).sum();
        let record_total: f64 = records.iter().map(|r| r.fishing_hours).sum();
        assert!((intensity_total - record_total).abs() < 1e-9);
        assert!(markers.iter().all(|m| m.label.starts_with("Station ")));
    }
}
