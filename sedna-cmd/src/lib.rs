//! Command implementations for the sEaDNA CLI.
//!
//! Provides subcommands for inspecting the bundled effort datasets and
//! for exporting the JSON payloads the static site consumes.

use clap::Subcommand;

pub mod export;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print the four season cards for a dataset selection
    Seasons {
        /// Region key (e.g. norwegian-coast)
        #[arg(short, long)]
        region: String,

        /// Dataset year (e.g. 2023)
        #[arg(short, long)]
        year: String,

        /// Month filter, 1-12 or "All Months"
        #[arg(short, long, default_value = "All Months")]
        month: String,

        /// Vessel id filter or "All Vessels"
        #[arg(short, long, default_value = "All Vessels")]
        vessel: String,

        /// Restrict the cards to one station display name
        #[arg(long)]
        station: Option<String>,
    },

    /// List the distinct sampling locations in a selection
    Stations {
        #[arg(short, long)]
        region: String,

        #[arg(short, long)]
        year: String,

        #[arg(short, long, default_value = "All Months")]
        month: String,

        #[arg(short, long, default_value = "All Vessels")]
        vessel: String,
    },

    /// List the distinct vessel ids in a dataset
    Vessels {
        #[arg(short, long)]
        region: String,

        #[arg(short, long)]
        year: String,
    },

    /// Write the map marker payload for a selection as JSON
    Markers {
        #[arg(short, long)]
        region: String,

        #[arg(short, long)]
        year: String,

        #[arg(short, long, default_value = "All Months")]
        month: String,

        #[arg(short, long, default_value = "All Vessels")]
        vessel: String,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Write the dashboard payload JSON for every page variant
    Export {
        /// Output directory for the payload files
        #[arg(short, long)]
        out_dir: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Seasons {
            region,
            year,
            month,
            vessel,
            station,
        } => report::run_seasons(&region, &year, &month, &vessel, station.as_deref()),
        Command::Stations {
            region,
            year,
            month,
            vessel,
        } => report::run_stations(&region, &year, &month, &vessel),
        Command::Vessels { region, year } => report::run_vessels(&region, &year),
        Command::Markers {
            region,
            year,
            month,
            vessel,
            out,
        } => export::run_markers(&region, &year, &month, &vessel, out.as_deref()),
        Command::Export { out_dir } => export::run_export(&out_dir),
    }
}
