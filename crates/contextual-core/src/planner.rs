//! Plan builder: maps engine decisions into user-facing plans.
//!
//! The same decision-to-plan mapping serves three sources: automatic
//! evaluation ("auto"), manual triggers (the manual id), and the remote
//! planner ("remote"). Non-triggered decisions pass through with a null
//! plan.

use serde::{Deserialize, Serialize};

use crate::context::{Context, MemorySnapshot};
use crate::engine::{Decision, DecisionStatus, TriggerEngine};
use crate::moment::{ActionKind, ActionStyle, ConsentState, Moment, MomentAction};

/// The user-facing action pairing derived from a triggered moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "momentID")]
    pub moment_id: String,
    pub title: String,
    #[serde(default)]
    pub whisper_audio_key: Option<String>,
    pub host_line: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub primary_action: MomentAction,
    #[serde(default)]
    pub secondary_action: Option<MomentAction>,
    /// "auto", a manual trigger id, or "remote".
    pub source: String,
}

/// A [`Decision`] plus the plan derived from it (null unless triggered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDecision {
    pub status: DecisionStatus,
    pub moment: Option<Moment>,
    pub plan: Option<Plan>,
    pub explanation: String,
    pub consent_state: ConsentState,
    pub eligibility: bool,
}

/// Stateless decision-to-plan mapper.
pub struct Planner;

impl Planner {
    pub fn new() -> Self {
        Self
    }

    /// Run automatic evaluation and derive a plan.
    pub fn plan(
        &self,
        context: &Context,
        snapshot: &MemorySnapshot,
        engine: &TriggerEngine,
        now: chrono::DateTime<chrono::Utc>,
    ) -> PlanDecision {
        let decision = engine.evaluate(context, snapshot, now);
        self.map(decision, "auto")
    }

    /// Run a manual trigger and derive a plan. The plan's source is the
    /// manual id itself.
    pub fn plan_manual(
        &self,
        manual_id: &str,
        snapshot: &MemorySnapshot,
        engine: &TriggerEngine,
        now: chrono::DateTime<chrono::Utc>,
    ) -> PlanDecision {
        let decision = engine.manual_trigger(manual_id, snapshot, now);
        self.map(decision, manual_id)
    }

    /// Fold a decision into the uniform plan-decision shape.
    pub fn map(&self, decision: Decision, source: &str) -> PlanDecision {
        let plan = match (&decision.status, &decision.moment) {
            (DecisionStatus::Triggered, Some(moment)) => Some(build_plan(moment, source)),
            _ => None,
        };
        PlanDecision {
            status: decision.status,
            moment: decision.moment,
            plan,
            explanation: decision.explanation,
            consent_state: decision.consent_state,
            eligibility: decision.eligibility,
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a plan from a triggered moment: primary/secondary by style
/// rank, with a synthesized acknowledge action when the moment offers
/// none.
pub fn build_plan(moment: &Moment, source: &str) -> Plan {
    let (primary, secondary) = select_actions(&moment.actions);
    Plan {
        moment_id: moment.id.clone(),
        title: moment.title.clone(),
        whisper_audio_key: moment.whisper_audio_key.clone(),
        host_line: moment.host_line.clone(),
        detail: moment.detail.clone(),
        primary_action: primary,
        secondary_action: secondary,
        source: source.to_string(),
    }
}

fn select_actions(actions: &[MomentAction]) -> (MomentAction, Option<MomentAction>) {
    if actions.is_empty() {
        let fallback =
            MomentAction::new("Not now", ActionKind::Acknowledge, ActionStyle::Secondary);
        return (fallback, None);
    }

    // Stable sort keeps catalog order among equal ranks.
    let mut sorted: Vec<&MomentAction> = actions.iter().collect();
    sorted.sort_by_key(|a| a.style.rank());

    let primary = sorted[0].clone();
    let secondary = sorted.get(1).map(|a| (*a).clone());
    (primary, secondary)
}
