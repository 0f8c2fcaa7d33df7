//! Wire types for the remote planner relay.
//!
//! Field keys are byte-compatible with the original relay contract;
//! note the `ID`-suffixed keys that plain camelCase would get wrong.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::{Context, MemorySnapshot};
use crate::events::AgentEvent;
use crate::moment::{ConsentState, Moment};
use crate::planner::Plan;

/// Request body for `POST agent/plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(rename = "contextualID")]
    pub contextual_id: String,
    pub context: Context,
    pub memory: MemorySnapshot,
    /// Bounded to the last 20 events by the caller; see
    /// [`crate::events::EventLog::recent_for_wire`].
    pub recent_events: Vec<AgentEvent>,
    #[serde(default, rename = "manualID")]
    pub manual_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Response body from the relay. `status` stays a string so unknown
/// values surface as a normalization failure, not a decode panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub status: String,
    pub explanation: String,
    #[serde(default)]
    pub moment: Option<Moment>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub eligibility: Option<bool>,
    #[serde(default)]
    pub consent_state: Option<ConsentState>,
}
