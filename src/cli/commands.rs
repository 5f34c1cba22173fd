use tracing::Level;

use crate::analyzers::band_subset;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::{Band, Location};
use crate::processors::ComfortPipeline;
use crate::readers::DailyCsvReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::TableWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            input,
            output_dir,
            year,
            location,
            latitude,
            longitude,
            strict,
        } => {
            println!("Processing daily temperature series...");
            println!("Input file: {}", input.display());
            println!("Output directory: {}", output_dir.display());

            let dataset_location = resolve_location(location, latitude, longitude);

            let progress = ProgressReporter::new_spinner("Computing climate indicators...", false);

            let pipeline = ComfortPipeline::new()
                .with_location(dataset_location)
                .with_strict_validation(strict);
            let report = pipeline.run(&input)?;

            progress.finish_with_message(&format!(
                "Aggregated {} records into {} years",
                report.record_count,
                report.yearly.len()
            ));

            let writer = TableWriter::new();
            writer.write_tables(&report, &output_dir)?;

            if let Some(selected) = year {
                match report.map_marker(selected) {
                    Some(marker) => {
                        writer.write_map_marker(&marker, &output_dir)?;
                        println!(
                            "Map marker for {}: {} comfortable days at ({:.4}, {:.4})",
                            marker.year, marker.comfortable_days, marker.latitude, marker.longitude
                        );
                    }
                    None => println!("No data for year {} - map marker skipped", selected),
                }
            }

            println!("\nYearly summary:");
            for row in &report.summary {
                println!(
                    "{}: avg {:.2}C, {} comfortable days ({:.1}%), {} hot days, top month {}",
                    row.year,
                    row.avg_temp_c,
                    row.comfortable_days,
                    row.comfort_ratio,
                    row.hot_days,
                    row.top_month.as_deref().unwrap_or("-"),
                );
            }

            println!("\nProcessing complete!");
        }

        Commands::Validate { input } => {
            println!("Validating daily temperature series...");
            println!("Input file: {}", input.display());

            let reader = DailyCsvReader::new().with_strict_validation(true);
            let records = reader.read(&input)?;

            let first = records.iter().map(|r| r.date).min();
            let last = records.iter().map(|r| r.date).max();
            match (first, last) {
                (Some(first), Some(last)) => {
                    println!("{} records from {} to {}", records.len(), first, last)
                }
                _ => println!("File parsed but contains no records"),
            }
            println!("All rows passed schema, date, and range checks");
        }

        Commands::Info { input, sample } => {
            println!("Analyzing daily temperature series: {}", input.display());

            let reader = DailyCsvReader::new();
            let records = reader.read(&input)?;

            let (first, last) = match (
                records.iter().map(|r| r.date).min(),
                records.iter().map(|r| r.date).max(),
            ) {
                (Some(first), Some(last)) => (first, last),
                _ => {
                    println!("File parsed but contains no records");
                    return Ok(());
                }
            };

            let mean =
                records.iter().map(|r| r.temp_c as f64).sum::<f64>() / records.len() as f64;
            let comfortable = band_subset(&records, Band::Comfortable).len();
            let hot = band_subset(&records, Band::ExtremeHeat).len();

            println!("\nLocation: {}", reader.location().name);
            println!("Records: {}", records.len());
            println!("Date range: {} to {}", first, last);
            println!("Mean temperature: {:.2}C", mean);
            println!("Comfortable days (18-25C): {}", comfortable);
            println!("Extreme heat days (>35C): {}", hot);

            if sample > 0 {
                println!("\nSample records (showing up to {}):", sample);
                for (i, record) in records.iter().take(sample).enumerate() {
                    println!("{}. {}: {:.1}C", i + 1, record.date, record.temp_c);
                }
            }
        }
    }

    Ok(())
}

fn resolve_location(
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Location {
    let default = Location::default();
    Location::new(
        name.unwrap_or(default.name),
        latitude.unwrap_or(default.latitude),
        longitude.unwrap_or(default.longitude),
    )
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location_defaults() {
        let location = resolve_location(None, None, None);
        assert_eq!(location.name, "Islamabad");
        assert_eq!(location.latitude, 33.6844);
    }

    #[test]
    fn test_resolve_location_overrides() {
        let location = resolve_location(Some("Lahore".to_string()), Some(31.5204), Some(74.3587));
        assert_eq!(location.name, "Lahore");
        assert_eq!(location.latitude, 31.5204);
        assert_eq!(location.longitude, 74.3587);
    }
}
