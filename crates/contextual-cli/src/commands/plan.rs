use chrono::Utc;
use clap::{Args, Subcommand};
use contextual_core::{
    Config, Context, ContextualId, MemoryError, PlanRequest, Planner, RemotePlanner,
};

use super::{load_engine, load_snapshot, print_json};

#[derive(Args)]
pub struct LocationArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Current floor band
    #[arg(long)]
    pub floor_band: Option<String>,
    /// Place identifier
    #[arg(long)]
    pub place_id: Option<String>,
    /// Venue (defaults to configured venue)
    #[arg(long)]
    pub venue: Option<String>,
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Plan from automatic evaluation
    Auto(LocationArgs),
    /// Plan from a manual trigger id
    Manual {
        /// Manual trigger id (e.g. moment.arrival)
        manual_id: String,
        /// Venue (defaults to configured venue)
        #[arg(long)]
        venue: Option<String>,
    },
    /// Ask the remote planner, falling back to local evaluation
    Remote(LocationArgs),
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = Planner::new();
    match action {
        PlanAction::Auto(args) => {
            let engine = load_engine(args.venue.as_deref())?;
            let snapshot = load_snapshot()?;
            let now = Utc::now();
            let context = context_from(&args, now);
            let decision = planner.plan(&context, &snapshot, &engine, now);
            print_json(&decision)
        }
        PlanAction::Manual { manual_id, venue } => {
            let engine = load_engine(venue.as_deref())?;
            let snapshot = load_snapshot()?;
            let decision = planner.plan_manual(&manual_id, &snapshot, &engine, Utc::now());
            print_json(&decision)
        }
        PlanAction::Remote(args) => {
            let config = Config::load()?;
            let base_url = config
                .remote
                .base_url
                .as_deref()
                .ok_or("no remote planner configured; run `config set-remote-url` first")?;
            let remote = RemotePlanner::new(base_url, config.remote.request_timeout_secs)?;

            let engine = load_engine(args.venue.as_deref())?;
            let snapshot = load_snapshot()?;
            let now = Utc::now();
            let request = PlanRequest {
                contextual_id: load_or_create_identity()?.uuid.to_string(),
                context: context_from(&args, now),
                memory: snapshot,
                recent_events: vec![],
                manual_id: None,
                timestamp: now,
            };

            let runtime = tokio::runtime::Runtime::new()?;
            let decision = runtime
                .block_on(remote.plan_with_fallback(&request, &engine, &planner, now));
            print_json(&decision)
        }
    }
}

fn context_from(args: &LocationArgs, now: chrono::DateTime<Utc>) -> Context {
    Context {
        place_id: args.place_id.clone(),
        latitude: args.lat,
        longitude: args.lon,
        floor_band: args.floor_band.clone(),
        timestamp: now,
    }
}

/// Stable per-install identity, persisted next to the memory snapshot.
fn load_or_create_identity() -> Result<ContextualId, Box<dyn std::error::Error>> {
    let path = contextual_core::memory::data_dir()?.join("identity.json");
    if let Ok(data) = std::fs::read_to_string(&path) {
        if let Ok(identity) = serde_json::from_str(&data) {
            return Ok(identity);
        }
    }
    let identity = ContextualId::generate();
    let data = serde_json::to_string_pretty(&identity)?;
    std::fs::write(&path, data).map_err(|source| MemoryError::WriteFailed {
        path: path.clone(),
        source,
    })?;
    Ok(identity)
}
