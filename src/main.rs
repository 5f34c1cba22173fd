use clap::Parser;
use thermal_comfort::cli::{run, Cli};
use thermal_comfort::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
