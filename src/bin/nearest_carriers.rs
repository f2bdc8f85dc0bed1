//! Command line front end for the carrier locator.
//!
//! The user location is given as coordinates; geocoding an address is
//! left to whatever produces them.

use std::{path::PathBuf, process::ExitCode};

use carrier_locator::{
    carrier::{retrieval_documents, CarrierRecord},
    config::LocatorConfig,
    geojson,
    location::Coordinate,
    ranking::Ranking,
    CarrierLocator, LocatorError, RequestedCount,
};
use clap::{Parser, ValueEnum};

/// Exit status for a bad location or count.
const INVALID_INPUT_EXIT: u8 = 2;

/// Find the logistics carriers closest to a location.
#[derive(Parser, Debug)]
#[command(name = "nearest-carriers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Latitude of the user, in degrees (required unless --format documents)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the user, in degrees (required unless --format documents)
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Carrier table (overrides CARRIER_DATA_PATH)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Number of carriers to return (default from CARRIER_DEFAULT_COUNT, or 3)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One card per carrier
    Text,
    /// The ranking as JSON
    Json,
    /// The ranking as a GeoJSON FeatureCollection
    Geojson,
    /// The whole table as retrieval documents, one JSON object per line
    Documents,
}

/// A validated ranking request.
struct Query {
    user: Coordinate,
    count: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            match err {
                LocatorError::InvalidInput(_) => ExitCode::from(INVALID_INPUT_EXIT),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), LocatorError> {
    let mut config = LocatorConfig::from_env();
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    // Caller input is checked before any data is read.
    let query = match cli.format {
        Format::Documents => None,
        _ => Some(Query {
            user: Coordinate::from_parts(cli.lat, cli.lon)?,
            count: match cli.count {
                Some(n) => RequestedCount::try_from(n)?.get(),
                None => config.default_count,
            },
        }),
    };

    let locator = CarrierLocator::from_config(&config)?;

    let Some(query) = query else {
        for document in retrieval_documents(locator.carriers()) {
            println!("{}", serde_json::to_string(&document)?);
        }
        return Ok(());
    };

    let ranking = locator.closest(&query.user, query.count)?;
    match cli.format {
        Format::Json => println!("{}", serde_json::to_string(&ranking)?),
        Format::Geojson => println!(
            "{}",
            geojson::ranking_to_feature_collection(&query.user, &ranking)
        ),
        _ => print_cards(&ranking),
    }
    Ok(())
}

fn print_cards(ranking: &Ranking<'_, CarrierRecord>) {
    if ranking.is_empty() {
        println!("No carriers found near your location.");
    }
    for entry in &ranking.entries {
        let carrier = entry.carrier;
        println!("{}", carrier.name);
        println!("  State: {}", carrier.state);
        println!("  Address: {}", carrier.address);
        println!("  Distance: {:.2} km", entry.distance_km);
    }
    if ranking.skipped_count() > 0 {
        println!(
            "warning: {} carriers had unusable location data",
            ranking.skipped_count()
        );
    }
}
