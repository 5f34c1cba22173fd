use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "thermal-comfort")]
#[command(about = "Thermal comfort and climate trend indicators for daily temperature series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the indicator pipeline and write the dashboard tables
    Report {
        #[arg(short, long, help = "Input daily temperature CSV file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value = "tables",
            help = "Output directory for the table files"
        )]
        output_dir: PathBuf,

        #[arg(short, long, help = "Year to export as the map-marker table")]
        year: Option<i32>,

        #[arg(long, help = "Location name attached to the dataset")]
        location: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Dataset latitude override")]
        latitude: Option<f64>,

        #[arg(long, allow_hyphen_values = true, help = "Dataset longitude override")]
        longitude: Option<f64>,

        #[arg(long, help = "Reject implausible temperatures and coordinates")]
        strict: bool,
    },

    /// Validate the input file without writing any tables
    Validate {
        #[arg(short, long, help = "Input daily temperature CSV file")]
        input: PathBuf,
    },

    /// Display a dataset overview
    Info {
        #[arg(short, long, help = "Input daily temperature CSV file")]
        input: PathBuf,

        #[arg(short, long, default_value = "5", help = "Number of sample rows to show")]
        sample: usize,
    },
}
