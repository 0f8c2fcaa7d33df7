use chrono::Utc;
use clap::Args;

use super::{load_engine, load_snapshot, print_json};

#[derive(Args)]
pub struct TriggerArgs {
    /// Manual trigger id (e.g. moment.arrival)
    pub manual_id: String,
    /// Venue to look up (defaults to configured venue)
    #[arg(long)]
    pub venue: Option<String>,
}

pub fn run(args: TriggerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let engine = load_engine(args.venue.as_deref())?;
    let snapshot = load_snapshot()?;
    let decision = engine.manual_trigger(&args.manual_id, &snapshot, Utc::now());
    print_json(&decision)
}
