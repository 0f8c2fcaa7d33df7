use chrono::Utc;
use clap::Args;
use contextual_core::Context;

use super::{load_engine, load_snapshot, print_json};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Current floor band (e.g. FT-LOBBY)
    #[arg(long)]
    pub floor_band: Option<String>,
    /// Place identifier
    #[arg(long)]
    pub place_id: Option<String>,
    /// Venue to evaluate against (defaults to configured venue)
    #[arg(long)]
    pub venue: Option<String>,
}

pub fn run(args: EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let engine = load_engine(args.venue.as_deref())?;
    let snapshot = load_snapshot()?;
    let now = Utc::now();

    let context = Context {
        place_id: args.place_id,
        latitude: args.lat,
        longitude: args.lon,
        floor_band: args.floor_band,
        timestamp: now,
    };

    let decision = engine.evaluate(&context, &snapshot, now);
    print_json(&decision)
}
