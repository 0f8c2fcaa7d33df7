pub mod config;
pub mod evaluate;
pub mod memory;
pub mod plan;
pub mod trigger;

use contextual_core::{Config, MemorySnapshot, MemoryStore, TriggerEngine};

use crate::venues;

/// Build an engine for the named venue, or the configured default.
pub fn load_engine(venue_id: Option<&str>) -> Result<TriggerEngine, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let id = venue_id.unwrap_or(&config.default_venue);
    let venue = venues::venue(id).ok_or_else(|| format!("unknown venue '{id}'"))?;
    Ok(TriggerEngine::new(venue.zone, venue.moments))
}

/// Current memory snapshot from the on-disk store.
pub fn load_snapshot() -> Result<MemorySnapshot, Box<dyn std::error::Error>> {
    Ok(MemoryStore::open()?.snapshot())
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `venues` subcommand: list the known demo venues.
pub fn venues_list() -> Result<(), Box<dyn std::error::Error>> {
    for venue in venues::venues() {
        println!(
            "{}  {} ({} POIs, {} moments)\n    {}",
            venue.id,
            venue.name,
            venue.zone.pois.len(),
            venue.moments.len(),
            venue.notes
        );
    }
    Ok(())
}
