//! Agent event log.
//!
//! Every notable thing the surrounding application does (location fix,
//! action tap, reaction, whisper playback) produces an [`AgentEvent`].
//! The log is in-memory and capped; its tail feeds the remote planner's
//! `recentEvents` payload.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of events retained in memory.
const MAX_STORED_EVENTS: usize = 200;

/// Number of events sent on the remote planner wire.
const WIRE_EVENT_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Location,
    Action,
    Reaction,
    Whisper,
    System,
}

/// One entry in the agent's activity trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEvent {
    pub id: Uuid,
    pub kind: EventKind,
    #[serde(default)]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl AgentEvent {
    pub fn new(kind: EventKind, detail: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            detail: Some(detail.into()),
            timestamp,
            metadata: HashMap::new(),
        }
    }
}

/// Capped in-memory event log.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<AgentEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: AgentEvent) {
        self.events.push(event);
        if self.events.len() > MAX_STORED_EVENTS {
            let overflow = self.events.len() - MAX_STORED_EVENTS;
            self.events.drain(..overflow);
        }
    }

    /// Most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&AgentEvent> {
        self.events.iter().rev().take(limit).collect()
    }

    /// The last 20 events in chronological order, for
    /// [`crate::remote::PlanRequest::recent_events`].
    pub fn recent_for_wire(&self) -> Vec<AgentEvent> {
        let start = self.events.len().saturating_sub(WIRE_EVENT_LIMIT);
        self.events[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
