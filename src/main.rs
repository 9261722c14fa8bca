mod client;
mod config;
mod crew;
mod observer;
mod passes;
mod satellite;
mod store;
mod subsolar;
mod timeline;
mod tracker;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use crate::client::TelemetryClient;
use crate::config::Config;
use crate::observer::Observer;
use crate::passes::{number_of_stars, PassPredictor};
use crate::satellite::Satellite;

#[derive(Parser)]
#[command(name = "orbitwatch")]
#[command(about = "Live satellite position, pass and crew telemetry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the trackers, crew monitor and web API
    Serve {
        #[arg(long, default_value = "orbitwatch.yaml")]
        config: String,
    },
    /// Fetch a satellite's current position once
    Position {
        #[arg(long, default_value = "orbitwatch.yaml")]
        config: String,
        #[arg(long, value_enum)]
        satellite: Satellite,
    },
    /// List upcoming visible passes
    Passes {
        #[arg(long, default_value = "orbitwatch.yaml")]
        config: String,
        #[arg(long, value_enum)]
        satellite: Satellite,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Fetch the current crew roster once
    Crew {
        #[arg(long, default_value = "orbitwatch.yaml")]
        config: String,
    },
    /// Print the current subsolar point
    Subsolar,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Position { config, satellite } => position(&config, satellite).await,
        Commands::Passes {
            config,
            satellite,
            lat,
            lon,
        } => passes(&config, satellite, lat, lon).await,
        Commands::Crew { config } => crew(&config).await,
        Commands::Subsolar => subsolar(),
    }
}

fn load_config(path: &str) -> Result<Config, ExitCode> {
    Config::from_file(path).map_err(|e| {
        eprintln!("Error loading config {}: {}", path, e);
        ExitCode::FAILURE
    })
}

fn build_client(config: &Config) -> Result<TelemetryClient, ExitCode> {
    TelemetryClient::new(&config.api).map_err(|e| {
        eprintln!("Error building client: {}", e);
        ExitCode::FAILURE
    })
}

async fn serve(config_path: &str) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn position(config_path: &str, satellite: Satellite) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let client = match build_client(&config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let observer = match config.observer() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.fetch_position(satellite, observer).await {
        Ok(sample) => {
            println!(
                "{} @ {}: lat {:.4} lon {:.4} alt {:.1} km{}",
                satellite,
                sample.timestamp,
                sample.latitude,
                sample.longitude,
                sample.altitude_km,
                if sample.eclipsed { " (in eclipse)" } else { "" }
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Position fetch failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn passes(
    config_path: &str,
    satellite: Satellite,
    lat: Option<f64>,
    lon: Option<f64>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let client = match build_client(&config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let observer = match (lat, lon) {
        (Some(lat), Some(lon)) => Observer::with_position(lat, lon),
        _ => match config.observer() {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let predictor = PassPredictor::new(Arc::new(client));
    let passes = predictor.get_passes(satellite, observer).await;

    println!("{} upcoming passes for {}", passes.len(), satellite);
    for (i, pass) in passes.iter().enumerate() {
        let stars = match number_of_stars(pass.magnitude) {
            Some(stars) => "*".repeat(stars as usize),
            None => "no magnitude".to_string(),
        };
        println!(
            "  {}: {} from {} max el {:.1} deg, {} s [{}]",
            i + 1,
            pass.start_utc,
            pass.start_az_compass,
            pass.max_el,
            pass.duration_seconds,
            stars
        );
    }
    ExitCode::SUCCESS
}

async fn crew(config_path: &str) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let client = match build_client(&config) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match client.fetch_crew().await {
        Ok(envelope) => {
            println!("{} people in space", envelope.number);
            for person in &envelope.people {
                println!(
                    "  {} {} - {} ({})",
                    crew::country_display(&person.country),
                    person.name,
                    person.location,
                    person.title
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Crew fetch failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn subsolar() -> ExitCode {
    let point = subsolar::subsolar_point(chrono::Utc::now());
    println!(
        "Subsolar point: lat {:.2} lon {:.2}",
        point.latitude, point.longitude
    );
    ExitCode::SUCCESS
}
