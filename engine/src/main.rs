// laptop-insights: load a laptop listing table and print its aggregates
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use laptop_engine::config::settings::EngineSettings;
use laptop_engine::services::ListingService;
use tracing::info;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "laptop-insights", about = "Summarizes a CSV table of laptop listings")]
struct CliArgs {
    /// Laptop listing table (comma separated, header row first)
    input: PathBuf,

    /// Engine settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Directory to write the aggregate tables into as CSV
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = CliArgs::parse();

    let settings = match &args.config {
        Some(path) => EngineSettings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    let export_dir = args.export.clone().or_else(|| settings.export_dir.clone());

    let mut service = ListingService::new(settings);
    let response = service
        .load_csv_data(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    if !response.success {
        bail!(response.message);
    }
    info!(laptops = response.laptops_loaded, "{}", response.message);

    let report = service.report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text(&service.settings().currency));
    }

    if let Some(dir) = export_dir {
        let written = service.export_aggregates(&dir)?;
        info!(files = written.len(), dir = %dir.display(), "Exported aggregate tables");
    }

    Ok(())
}
