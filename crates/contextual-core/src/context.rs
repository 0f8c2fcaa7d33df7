//! Evaluation inputs: location context, memory snapshot, identity.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A location fix plus coarse vertical position, supplied by the caller
/// per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub floor_band: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Context {
    pub fn at(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            place_id: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
            floor_band: None,
            timestamp,
        }
    }

    pub fn with_floor_band(mut self, floor_band: impl Into<String>) -> Self {
        self.floor_band = Some(floor_band.into());
        self
    }
}

/// Immutable view of the memory store passed into each evaluation.
///
/// The engine reads only `permission_tokens`; likes and ignores ride
/// along for the remote planner wire payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    #[serde(default)]
    pub liked_drops: HashSet<Uuid>,
    #[serde(default)]
    pub ignored_drops: HashSet<Uuid>,
    #[serde(default)]
    pub permission_tokens: HashSet<String>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl MemorySnapshot {
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permission_tokens: tokens.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Stable per-install identity sent with remote plan requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualId {
    pub uuid: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ContextualId {
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

impl Default for ContextualId {
    fn default() -> Self {
        Self::generate()
    }
}
