//! Trigger engine: filters the moment catalog against location, gating,
//! floor band and cooldown state, then selects the best moment.
//!
//! The engine owns only the per-moment last-delivery timestamps. All
//! other state (location, memory snapshot, clock) is supplied per call,
//! so evaluation is synchronous, pure of I/O, and callable from whatever
//! thread holds the caller's state. One engine instance must not be
//! shared across threads without external serialization.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::{Context, MemorySnapshot};
use crate::geo::{PointOfInterest, Zone};
use crate::moment::{ConsentState, Moment, Trigger};

/// Outcome category of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecisionStatus {
    Triggered,
    MissingLocation,
    OutsideZone,
    NoMatch,
}

/// Result of an evaluation or manual trigger. Never an error: every
/// non-firing outcome is a typed status with an explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub status: DecisionStatus,
    pub moment: Option<Moment>,
    pub explanation: String,
    pub consent_state: ConsentState,
    pub eligibility: bool,
}

impl Decision {
    fn ineligible(status: DecisionStatus, explanation: String) -> Self {
        Self {
            status,
            moment: None,
            explanation,
            consent_state: ConsentState::Idle,
            eligibility: false,
        }
    }
}

/// Catalog evaluator with per-moment cooldown bookkeeping.
pub struct TriggerEngine {
    zone: Zone,
    catalog: Vec<Moment>,
    last_delivered: HashMap<String, DateTime<Utc>>,
}

impl TriggerEngine {
    pub fn new(zone: Zone, catalog: Vec<Moment>) -> Self {
        Self {
            zone,
            catalog,
            last_delivered: HashMap::new(),
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn catalog(&self) -> &[Moment] {
        &self.catalog
    }

    /// Evaluate the catalog against a location fix and memory snapshot.
    pub fn evaluate(
        &self,
        context: &Context,
        snapshot: &MemorySnapshot,
        now: DateTime<Utc>,
    ) -> Decision {
        let (latitude, longitude) = match (context.latitude, context.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Decision::ineligible(
                    DecisionStatus::MissingLocation,
                    "No location fix available.".to_string(),
                );
            }
        };

        if !self.zone.contains(latitude, longitude) {
            return Decision::ineligible(
                DecisionStatus::OutsideZone,
                format!("Outside {} zone.", self.zone.display_name),
            );
        }

        let poi = self.zone.poi_containing(latitude, longitude);

        let mut eligible: Vec<&Moment> = self
            .catalog
            .iter()
            .filter(|m| Self::passes_trigger(m, poi))
            .filter(|m| Self::passes_gating(m, snapshot))
            .filter(|m| Self::passes_floor_band(m, context))
            .filter(|m| self.passes_cooldown(m, now))
            .collect();

        // Priority descending, ties by id ascending for determinism.
        eligible.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));

        let Some(moment) = eligible.first() else {
            let explanation = self.diagnostics(poi, snapshot, context, now);
            tracing::debug!(%explanation, "no moment matched");
            return Decision::ineligible(DecisionStatus::NoMatch, explanation);
        };

        let explanation = match poi {
            Some(poi) => format!("Matched {}", poi.name),
            None => "Zone-wide moment available".to_string(),
        };
        tracing::debug!(moment = %moment.id, %explanation, "moment triggered");

        Decision {
            status: DecisionStatus::Triggered,
            moment: Some((*moment).clone()),
            explanation,
            consent_state: ConsentState::Awaiting,
            eligibility: true,
        }
    }

    /// Explicit invocation by manual trigger id. Bypasses geofencing and
    /// floor bands; gating and cooldown still apply.
    pub fn manual_trigger(
        &self,
        manual_id: &str,
        snapshot: &MemorySnapshot,
        now: DateTime<Utc>,
    ) -> Decision {
        let Some(moment) = self
            .catalog
            .iter()
            .find(|m| m.manual_trigger_id.as_deref() == Some(manual_id))
        else {
            return Decision::ineligible(
                DecisionStatus::NoMatch,
                format!("No moment wired to {manual_id}."),
            );
        };

        if !Self::passes_gating(moment, snapshot) {
            let token = moment
                .gating_token
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| "required entitlement".to_string());
            return Decision::ineligible(
                DecisionStatus::NoMatch,
                format!("Missing {token} token."),
            );
        }

        if !self.passes_cooldown(moment, now) {
            let remaining = self
                .remaining_cooldown(moment, now)
                .unwrap_or(moment.cooldown_seconds);
            return Decision {
                status: DecisionStatus::NoMatch,
                moment: None,
                explanation: format!("Cooling down {}s more.", remaining as i64),
                consent_state: ConsentState::CoolingDown,
                eligibility: false,
            };
        }

        Decision {
            status: DecisionStatus::Triggered,
            moment: Some(moment.clone()),
            explanation: "Manual trigger ready.".to_string(),
            consent_state: ConsentState::Awaiting,
            eligibility: true,
        }
    }

    /// Record a delivery, engaging the moment's cooldown. Called by the
    /// caller exactly once per surfaced moment; evaluation never records
    /// deliveries itself.
    pub fn mark_delivered(&mut self, moment_id: &str, at: DateTime<Utc>) {
        self.last_delivered.insert(moment_id.to_string(), at);
    }

    fn passes_trigger(moment: &Moment, poi: Option<&PointOfInterest>) -> bool {
        match &moment.trigger {
            Trigger::ZoneEntry => true,
            Trigger::Poi(poi_id) => poi.map(|p| p.id == *poi_id).unwrap_or(false),
            Trigger::Manual(_) => false,
        }
    }

    fn passes_gating(moment: &Moment, snapshot: &MemorySnapshot) -> bool {
        match &moment.gating_token {
            Some(token) => snapshot.permission_tokens.contains(token),
            None => true,
        }
    }

    fn passes_floor_band(moment: &Moment, context: &Context) -> bool {
        let Some(required) = moment.required_floor_band() else {
            return true;
        };
        match &context.floor_band {
            Some(current) => current.to_lowercase() == required.to_lowercase(),
            None => false,
        }
    }

    fn passes_cooldown(&self, moment: &Moment, now: DateTime<Utc>) -> bool {
        match self.last_delivered.get(&moment.id) {
            Some(last) => elapsed_seconds(*last, now) >= moment.cooldown_seconds,
            None => true,
        }
    }

    fn remaining_cooldown(&self, moment: &Moment, now: DateTime<Utc>) -> Option<f64> {
        let last = self.last_delivered.get(&moment.id)?;
        let remaining = moment.cooldown_seconds - elapsed_seconds(*last, now);
        (remaining > 0.0).then_some(remaining)
    }

    /// Best-effort no-match explanation. Each filter is re-applied
    /// independently to the trigger-matched subset and the first
    /// non-empty category wins, so the message may be approximate when
    /// several filters fail for different moments at once.
    fn diagnostics(
        &self,
        poi: Option<&PointOfInterest>,
        snapshot: &MemorySnapshot,
        context: &Context,
        now: DateTime<Utc>,
    ) -> String {
        let scoped: Vec<&Moment> = self
            .catalog
            .iter()
            .filter(|m| Self::passes_trigger(m, poi))
            .collect();

        if scoped.is_empty() {
            return match poi {
                Some(poi) => format!("No scripted moment for {}.", poi.name),
                None => "No zone moments configured.".to_string(),
            };
        }

        let gated_tokens: Vec<String> = scoped
            .iter()
            .filter(|m| !Self::passes_gating(m, snapshot))
            .filter_map(|m| m.gating_token.as_deref().map(str::to_uppercase))
            .collect();
        if !gated_tokens.is_empty() {
            return format!("Waiting on tokens: {}", gated_tokens.join(", "));
        }

        let floor_blocked = scoped
            .iter()
            .filter(|m| !Self::passes_floor_band(m, context))
            .count();
        if floor_blocked > 0 {
            return format!("Wrong floor for {floor_blocked} moment(s).");
        }

        let cooling = scoped
            .iter()
            .filter(|m| !self.passes_cooldown(m, now))
            .count();
        if cooling > 0 {
            return format!("Cooling down {cooling} moment(s).");
        }

        "Moments here require manual trigger.".to_string()
    }
}

fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, PoiKind};
    use chrono::Duration;

    const ZONE_LAT: f64 = 37.78975;
    const ZONE_LON: f64 = -122.40055;
    const POI_LAT: f64 = 37.78974;
    const POI_LON: f64 = -122.40046;

    fn test_zone() -> Zone {
        Zone {
            id: "frontier-walk-zone".to_string(),
            display_name: "Frontier Tower".to_string(),
            center: Coordinate::new(ZONE_LAT, ZONE_LON),
            radius_meters: 260.0,
            pois: vec![PointOfInterest {
                id: "frontier_arrival".to_string(),
                name: "Frontier Tower Entrance".to_string(),
                coordinate: Coordinate::new(POI_LAT, POI_LON),
                radius_meters: 3.0,
                kind: PoiKind::Arrival,
                metadata: None,
            }],
            notes: None,
        }
    }

    fn moment(id: &str, trigger: Trigger, priority: i32) -> Moment {
        Moment {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: None,
            whisper_audio_key: None,
            host_line: "Tink: hello".to_string(),
            detail: None,
            actions: vec![],
            requires_consent: true,
            gating_token: None,
            trigger,
            manual_trigger_id: None,
            priority,
            cooldown_seconds: 120.0,
            metadata: None,
        }
    }

    fn at_poi(now: DateTime<Utc>) -> Context {
        Context::at(POI_LAT, POI_LON, now)
    }

    fn now() -> DateTime<Utc> {
        "2026-08-24T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_missing_location() {
        let engine = TriggerEngine::new(test_zone(), vec![]);
        let context = Context {
            place_id: None,
            latitude: None,
            longitude: None,
            floor_band: None,
            timestamp: now(),
        };
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::MissingLocation);
        assert!(!decision.eligibility);
        assert_eq!(decision.explanation, "No location fix available.");
    }

    #[test]
    fn test_outside_zone() {
        let engine = TriggerEngine::new(test_zone(), vec![]);
        let context = Context::at(37.8100, -122.4005, now());
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::OutsideZone);
        assert_eq!(decision.explanation, "Outside Frontier Tower zone.");
    }

    #[test]
    fn test_poi_trigger_fires_with_poi_name() {
        let catalog = vec![moment(
            "m1",
            Trigger::Poi("frontier_arrival".to_string()),
            100,
        )];
        let engine = TriggerEngine::new(test_zone(), catalog);
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::Triggered);
        assert_eq!(decision.consent_state, ConsentState::Awaiting);
        assert!(decision.eligibility);
        assert_eq!(decision.moment.unwrap().id, "m1");
        assert!(decision.explanation.contains("Frontier Tower Entrance"));
    }

    #[test]
    fn test_zone_wide_moment_away_from_pois() {
        let catalog = vec![moment("wide", Trigger::ZoneEntry, 10)];
        let engine = TriggerEngine::new(test_zone(), catalog);
        // Zone center is outside the arrival POI's 3m radius.
        let context = Context::at(ZONE_LAT, ZONE_LON, now());
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::Triggered);
        assert_eq!(decision.explanation, "Zone-wide moment available");
    }

    #[test]
    fn test_manual_trigger_variant_never_auto_matches() {
        let catalog = vec![moment("m", Trigger::Manual("ai".to_string()), 100)];
        let engine = TriggerEngine::new(test_zone(), catalog);
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Moments here require manual trigger.");
    }

    #[test]
    fn test_priority_then_id_selection() {
        let catalog = vec![
            moment("b", Trigger::ZoneEntry, 80),
            moment("a", Trigger::ZoneEntry, 100),
        ];
        let engine = TriggerEngine::new(test_zone(), catalog);
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.moment.unwrap().id, "a");

        let catalog = vec![
            moment("zz", Trigger::ZoneEntry, 100),
            moment("aa", Trigger::ZoneEntry, 100),
        ];
        let engine = TriggerEngine::new(test_zone(), catalog);
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.moment.unwrap().id, "aa");
    }

    #[test]
    fn test_gating_token_unlocks() {
        let mut gated = moment("gated", Trigger::ZoneEntry, 100);
        gated.gating_token = Some("arrival".to_string());
        let engine = TriggerEngine::new(test_zone(), vec![gated]);

        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Waiting on tokens: ARRIVAL");

        let snapshot = MemorySnapshot::with_tokens(["arrival"]);
        let decision = engine.evaluate(&at_poi(now()), &snapshot, now());
        assert_eq!(decision.status, DecisionStatus::Triggered);
    }

    #[test]
    fn test_floor_band_filter() {
        let mut m = moment("floored", Trigger::ZoneEntry, 100);
        m.metadata = Some(
            [("floorBand".to_string(), "FT-LOBBY".to_string())]
                .into_iter()
                .collect(),
        );
        let engine = TriggerEngine::new(test_zone(), vec![m]);

        // Requirement present, context missing a band: fails.
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Wrong floor for 1 moment(s).");

        // Case-insensitive match passes.
        let context = at_poi(now()).with_floor_band("ft-lobby");
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::Triggered);

        // Wrong band fails.
        let context = at_poi(now()).with_floor_band("FT-5");
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
    }

    #[test]
    fn test_cooldown_boundary_inclusive() {
        let t0 = now();
        let catalog = vec![moment("m", Trigger::ZoneEntry, 100)];
        let mut engine = TriggerEngine::new(test_zone(), catalog);
        engine.mark_delivered("m", t0);

        let snapshot = MemorySnapshot::default();
        let decision = engine.evaluate(&at_poi(t0), &snapshot, t0 + Duration::seconds(60));
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Cooling down 1 moment(s).");

        // Exactly at cooldown the moment is eligible again.
        let decision = engine.evaluate(&at_poi(t0), &snapshot, t0 + Duration::seconds(120));
        assert_eq!(decision.status, DecisionStatus::Triggered);

        let decision = engine.evaluate(&at_poi(t0), &snapshot, t0 + Duration::seconds(300));
        assert_eq!(decision.status, DecisionStatus::Triggered);
    }

    #[test]
    fn test_no_scripted_moment_for_poi() {
        let catalog = vec![moment("other", Trigger::Poi("elsewhere".to_string()), 100)];
        let engine = TriggerEngine::new(test_zone(), catalog);
        let decision = engine.evaluate(&at_poi(now()), &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(
            decision.explanation,
            "No scripted moment for Frontier Tower Entrance."
        );
    }

    #[test]
    fn test_no_zone_moments_configured() {
        let engine = TriggerEngine::new(test_zone(), vec![]);
        let context = Context::at(ZONE_LAT, ZONE_LON, now());
        let decision = engine.evaluate(&context, &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "No zone moments configured.");
    }

    #[test]
    fn test_diagnostic_precedence_gating_before_cooldown() {
        let mut gated = moment("gated", Trigger::ZoneEntry, 100);
        gated.gating_token = Some("luma".to_string());
        let cooled = moment("cooled", Trigger::ZoneEntry, 90);

        let t0 = now();
        let mut engine = TriggerEngine::new(test_zone(), vec![gated, cooled]);
        engine.mark_delivered("cooled", t0);

        let decision = engine.evaluate(
            &at_poi(t0),
            &MemorySnapshot::default(),
            t0 + Duration::seconds(10),
        );
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Waiting on tokens: LUMA");
    }

    #[test]
    fn test_manual_trigger_unknown_id() {
        let engine = TriggerEngine::new(test_zone(), vec![]);
        let decision = engine.manual_trigger("moment.nope", &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "No moment wired to moment.nope.");
        assert_eq!(decision.consent_state, ConsentState::Idle);
    }

    #[test]
    fn test_manual_trigger_gating_and_cooldown() {
        let mut m = moment("m", Trigger::Poi("frontier_arrival".to_string()), 100);
        m.manual_trigger_id = Some("moment.arrival".to_string());
        m.gating_token = Some("arrival".to_string());
        let t0 = now();
        let mut engine = TriggerEngine::new(test_zone(), vec![m]);

        let decision = engine.manual_trigger("moment.arrival", &MemorySnapshot::default(), t0);
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.explanation, "Missing ARRIVAL token.");
        assert_eq!(decision.consent_state, ConsentState::Idle);

        let snapshot = MemorySnapshot::with_tokens(["arrival"]);
        let decision = engine.manual_trigger("moment.arrival", &snapshot, t0);
        assert_eq!(decision.status, DecisionStatus::Triggered);
        assert_eq!(decision.explanation, "Manual trigger ready.");

        engine.mark_delivered("m", t0);
        let decision = engine.manual_trigger("moment.arrival", &snapshot, t0 + Duration::seconds(50));
        assert_eq!(decision.status, DecisionStatus::NoMatch);
        assert_eq!(decision.consent_state, ConsentState::CoolingDown);
        assert_eq!(decision.explanation, "Cooling down 70s more.");
    }

    #[test]
    fn test_manual_trigger_bypasses_location_and_floor() {
        let mut m = moment("m", Trigger::Poi("frontier_arrival".to_string()), 100);
        m.manual_trigger_id = Some("moment.arrival".to_string());
        m.metadata = Some(
            [("floorBand".to_string(), "FT-16".to_string())]
                .into_iter()
                .collect(),
        );
        let engine = TriggerEngine::new(test_zone(), vec![m]);
        // No location, no floor band supplied; manual still fires.
        let decision = engine.manual_trigger("moment.arrival", &MemorySnapshot::default(), now());
        assert_eq!(decision.status, DecisionStatus::Triggered);
    }

    #[test]
    fn test_decision_wire_keys() {
        let decision = Decision::ineligible(
            DecisionStatus::MissingLocation,
            "No location fix available.".to_string(),
        );
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["status"], "missingLocation");
        assert_eq!(json["consentState"], "idle");
        assert_eq!(json["eligibility"], false);
    }
}
