//! sEaDNA CLI - inspect bundled effort datasets and export site payloads.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sedna-cli",
    version,
    about = "sEaDNA fishing-effort data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sedna_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sedna_cmd::run(cli.command)
}
