//! JSON payload exports consumed by the static site build.

use std::fs;
use std::path::Path;

use log::info;
use sedna_data::EffortCatalog;
use sedna_effort::filter::{MonthFilter, VesselFilter};
use sedna_effort::query;
use sedna_site::dashboard::{build_dashboard, DashboardVariant};

/// Write the map marker payload for a selection as JSON, to a file or
/// stdout.
pub fn run_markers(
    region: &str,
    year: &str,
    month: &str,
    vessel: &str,
    out: Option<&str>,
) -> anyhow::Result<()> {
    let catalog = EffortCatalog::load()?;
    let base = catalog.records(region, year);
    let selected = query::select_records(
        base,
        &MonthFilter::parse(month),
        &VesselFilter::parse(vessel),
    );
    let markers = query::station_markers(&selected);
    let json = serde_json::to_string_pretty(&markers)?;

    match out {
        Some(path) => {
            fs::write(path, &json)?;
            info!("Wrote {} markers to {}", markers.len(), path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Write the dashboard payload JSON for every page variant into a
/// directory. The site bundler picks these up at build time.
pub fn run_export(out_dir: &str) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)?;
    let catalog = EffortCatalog::load()?;

    for variant in DashboardVariant::ALL {
        let config = variant.config();
        let payload = build_dashboard(&catalog, &config, &config.initial_selection());
        let path = Path::new(out_dir).join(format!("{}.json", variant.key()));
        fs::write(&path, serde_json::to_string_pretty(&payload)?)?;
        info!("Wrote dashboard payload {}", path.display());
    }
    Ok(())
}
