mod nearby;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "safehaven-cli")]
#[command(about = "Find nearby police, fire, ambulance, hospital and doctor facilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve facilities near a coordinate
    Nearby {
        /// Category key (police, fire_station, ambulance, hospital, doctors) or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Origin latitude in decimal degrees
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Origin longitude in decimal degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Search radius in metres (defaults to SAFEHAVEN_DEFAULT_RADIUS_M)
        #[arg(long)]
        radius: Option<u32>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the built-in facility categories and their upstream tag filters
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = safehaven_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearby {
            category,
            lat,
            lon,
            radius,
            json,
        } => {
            let origin = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(safehaven_core::Coordinate::new(lat, lon)?),
                _ => None,
            };
            nearby::run_nearby(&config, &category, origin, radius, json).await?;
        }
        Commands::Categories => nearby::print_categories(),
    }

    Ok(())
}
