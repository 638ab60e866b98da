//! Terminal reports over the bundled datasets.

use log::info;
use sedna_data::EffortCatalog;
use sedna_effort::filter::{MonthFilter, VesselFilter};
use sedna_effort::models::{SeasonCard, Trend};
use sedna_effort::query;

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

/// Print the four season cards for a dataset selection.
pub fn run_seasons(
    region: &str,
    year: &str,
    month: &str,
    vessel: &str,
    station: Option<&str>,
) -> anyhow::Result<()> {
    let catalog = EffortCatalog::load()?;
    let base = catalog.records(region, year);
    let selected = query::select_records(
        base,
        &MonthFilter::parse(month),
        &VesselFilter::parse(vessel),
    );

    let summaries = match station {
        Some(name) => query::station_seasonal_effort(&selected, name),
        None => query::seasonal_effort(&selected),
    };

    info!(
        "Season report for {}/{} over {} records",
        region,
        year,
        selected.len()
    );
    let first_period = selected.iter().filter_map(|r| r.period_start()).min();
    let last_period = selected.iter().filter_map(|r| r.period_start()).max();
    if let (Some(first), Some(last)) = (first_period, last_period) {
        info!("Selection spans {first} to {last}");
    }

    for summary in &summaries {
        let card = SeasonCard::from(summary);
        println!(
            "{:<8} {} {:>12} {:>10} {:>6}",
            card.season,
            trend_icon(card.trend),
            card.effort,
            card.vessels,
            card.change
        );
    }
    Ok(())
}

/// List the distinct sampling locations in a selection.
pub fn run_stations(region: &str, year: &str, month: &str, vessel: &str) -> anyhow::Result<()> {
    let catalog = EffortCatalog::load()?;
    let base = catalog.records(region, year);
    let selected = query::select_records(
        base,
        &MonthFilter::parse(month),
        &VesselFilter::parse(vessel),
    );

    let locations = query::unique_locations(&selected);
    info!("{} sampling locations in {}/{}", locations.len(), region, year);
    for location in &locations {
        println!("{:<24} {:>7.2} {:>8.2}", location.name, location.lat, location.lon);
    }
    Ok(())
}

/// List the distinct vessel ids in a dataset.
pub fn run_vessels(region: &str, year: &str) -> anyhow::Result<()> {
    let catalog = EffortCatalog::load()?;
    let base = catalog.records(region, year);
    let vessels = query::unique_vessel_ids(base);
    info!("{} vessels in {}/{}", vessels.len(), region, year);
    for vessel in &vessels {
        println!("{vessel}");
    }
    Ok(())
}
