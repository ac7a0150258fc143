//! Command-line front end.
//!
//! The live ephemeris is an external collaborator, so the CLI feeds the
//! engines from a JSON positions file: sidereal longitudes for the 7
//! classical planets plus Rahu, and the ascendant. Dasha commands need only
//! the Moon's longitude and take it directly as a flag.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use kundali_base::{
    Planet, birth_balance, compute_ashtakavarga, detect_yogas, mahadasha_sequence, periods_at,
};
use kundali_engine::{
    BirthDetails, BodyState, EngineError, EphemerisSource, build_chart, parse_utc_offset,
    transit_aspects,
};

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal chart derivation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every command that assembles a full chart.
#[derive(clap::Args)]
struct ChartArgs {
    /// JSON positions file (ascendant + per-body sidereal states)
    #[arg(long)]
    positions: PathBuf,
    /// Local birth date-time (YYYY-MM-DDThh:mm:ss)
    #[arg(long)]
    birth: NaiveDateTime,
    /// Geographic latitude in degrees
    #[arg(long)]
    lat: f64,
    /// Geographic longitude in degrees
    #[arg(long)]
    lon: f64,
    /// UTC offset of the location (Z or +/-HH:MM)
    #[arg(long, default_value = "Z")]
    tz: String,
}

#[derive(clap::Args)]
struct DashaArgs {
    /// Moon's sidereal longitude at birth, degrees
    #[arg(long)]
    moon_longitude: f64,
    /// Local birth date-time (YYYY-MM-DDThh:mm:ss)
    #[arg(long)]
    birth: NaiveDateTime,
    /// UTC offset of the birth place (Z or +/-HH:MM)
    #[arg(long, default_value = "Z")]
    tz: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full chart snapshot
    Chart(ChartArgs),
    /// Detect yoga patterns in the chart
    Yogas(ChartArgs),
    /// Compute Ashtakavarga scores for the chart
    Ashtakavarga(ChartArgs),
    /// Compare transit positions against a natal chart
    Transits {
        #[command(flatten)]
        natal: ChartArgs,
        /// JSON positions file for the transit instant
        #[arg(long)]
        transit_positions: PathBuf,
    },
    /// Generate the 120-year mahadasha sequence
    Dasha(DashaArgs),
    /// Locate the periods containing an instant
    CurrentDasha {
        #[command(flatten)]
        dasha: DashaArgs,
        /// UTC instant to look up (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        at: DateTime<Utc>,
    },
}

/// Positions file: the provider contract satisfied from disk.
#[derive(Debug, Deserialize)]
struct PositionsFile {
    /// Sidereal ascendant longitude, degrees.
    ascendant: f64,
    bodies: Vec<BodyRecord>,
}

#[derive(Debug, Deserialize)]
struct BodyRecord {
    planet: Planet,
    longitude: f64,
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    speed: f64,
}

struct FilePositions {
    ascendant: f64,
    bodies: HashMap<Planet, BodyState>,
}

impl FilePositions {
    fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading positions file {}", path.display()))?;
        let file: PositionsFile =
            serde_json::from_str(&raw).context("parsing positions file")?;
        let bodies = file
            .bodies
            .into_iter()
            .map(|b| {
                (
                    b.planet,
                    BodyState {
                        longitude: b.longitude,
                        latitude: b.latitude,
                        speed: b.speed,
                    },
                )
            })
            .collect();
        Ok(Self {
            ascendant: file.ascendant,
            bodies,
        })
    }
}

impl EphemerisSource for FilePositions {
    fn body_state(&self, body: Planet, _jd_ut: f64) -> Result<BodyState, EngineError> {
        self.bodies.get(&body).copied().ok_or_else(|| {
            EngineError::UpstreamEphemeris(format!("no position for {}", body.name()))
        })
    }

    fn ascendant(&self, _jd_ut: f64, _lat: f64, _lon: f64) -> Result<f64, EngineError> {
        Ok(self.ascendant)
    }
}

fn birth_details(args: &ChartArgs) -> BirthDetails {
    BirthDetails {
        birth_time: args.birth,
        latitude: args.lat,
        longitude: args.lon,
        timezone: args.tz.clone(),
    }
}

fn load_chart(args: &ChartArgs) -> anyhow::Result<kundali_base::ChartSnapshot> {
    let source = FilePositions::load(&args.positions)?;
    let chart = build_chart(&source, &birth_details(args))?;
    Ok(chart)
}

fn dasha_birth_utc(args: &DashaArgs) -> anyhow::Result<DateTime<Utc>> {
    let offset = parse_utc_offset(&args.tz)?;
    Ok(DateTime::from_naive_utc_and_offset(
        args.birth - offset,
        Utc,
    ))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Chart(args) => {
            let chart = load_chart(&args)?;
            print_json(&chart)
        }
        Commands::Yogas(args) => {
            let chart = load_chart(&args)?;
            print_json(&detect_yogas(&chart))
        }
        Commands::Ashtakavarga(args) => {
            let chart = load_chart(&args)?;
            print_json(&compute_ashtakavarga(&chart))
        }
        Commands::Transits {
            natal,
            transit_positions,
        } => {
            let natal_chart = load_chart(&natal)?;
            let transit_source = FilePositions::load(&transit_positions)?;
            let transit_chart = build_chart(&transit_source, &birth_details(&natal))?;
            print_json(&transit_aspects(&natal_chart, &transit_chart))
        }
        Commands::Dasha(args) => {
            let balance = birth_balance(args.moon_longitude);
            let sequence = mahadasha_sequence(dasha_birth_utc(&args)?, &balance);
            print_json(&serde_json::json!({
                "balance_at_birth": balance,
                "periods": sequence,
            }))
        }
        Commands::CurrentDasha { dasha, at } => {
            let balance = birth_balance(dasha.moon_longitude);
            let sequence = mahadasha_sequence(dasha_birth_utc(&dasha)?, &balance);
            print_json(&periods_at(&sequence, at))
        }
    }
}
