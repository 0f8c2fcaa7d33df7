//! End-to-end walkthrough scenario over the frontier venue fixture:
//! arrival at the entrance POI, delivery and cooldown, token-gated
//! drop unlock, manual trigger, and plan building.

use chrono::{DateTime, Duration, Utc};
use contextual_core::{
    ActionKind, ActionStyle, ConsentState, Context, Coordinate, DecisionStatus, MemorySnapshot,
    Moment, MomentAction, Planner, PoiKind, PointOfInterest, Trigger, TriggerEngine, Zone,
};

fn frontier_zone() -> Zone {
    Zone {
        id: "frontier-walk-zone".to_string(),
        display_name: "Frontier Tower".to_string(),
        center: Coordinate::new(37.78975, -122.40055),
        radius_meters: 260.0,
        pois: vec![
            PointOfInterest {
                id: "frontier_arrival".to_string(),
                name: "Frontier Tower Entrance".to_string(),
                coordinate: Coordinate::new(37.78974, -122.40046),
                radius_meters: 3.0,
                kind: PoiKind::Arrival,
                metadata: Some(
                    [("floorBand".to_string(), "FT-LOBBY".to_string())]
                        .into_iter()
                        .collect(),
                ),
            },
            PointOfInterest {
                id: "frontier_drop_corner".to_string(),
                name: "Sky Lobby Drop".to_string(),
                coordinate: Coordinate::new(37.79092, -122.3992),
                radius_meters: 2.5,
                kind: PoiKind::Drop,
                metadata: None,
            },
        ],
        notes: None,
    }
}

fn action(id: &str, title: &str, style: ActionStyle) -> MomentAction {
    MomentAction {
        id: id.to_string(),
        title: title.to_string(),
        kind: ActionKind::OpenCard,
        style,
        payload: None,
        icon_name: None,
    }
}

fn arrival_moment() -> Moment {
    Moment {
        id: "frontier.arrival".to_string(),
        title: "Welcome to Frontier Tower".to_string(),
        subtitle: Some("Market St entrance".to_string()),
        whisper_audio_key: Some("psst_welcome_frontier".to_string()),
        host_line: "Tink: You are at Frontier. Want the quick orientation?".to_string(),
        detail: None,
        actions: vec![
            action("arrival.start", "Start walkthrough", ActionStyle::Primary),
            action("arrival.skip", "Not now", ActionStyle::Secondary),
        ],
        requires_consent: true,
        gating_token: None,
        trigger: Trigger::Poi("frontier_arrival".to_string()),
        manual_trigger_id: Some("moment.arrival".to_string()),
        priority: 100,
        cooldown_seconds: 120.0,
        metadata: None,
    }
}

fn drop_moment() -> Moment {
    Moment {
        id: "frontier.drop".to_string(),
        title: "Frontier drop unlocked".to_string(),
        subtitle: Some("Sky Lobby briefing".to_string()),
        whisper_audio_key: Some("psst_want_to_open".to_string()),
        host_line: "Tink: Kilroy left a media drop upstairs. Want me to open it?".to_string(),
        detail: None,
        actions: vec![
            action("drop.open", "Open drop", ActionStyle::Primary),
            action("drop.later", "Save for later", ActionStyle::Subtle),
        ],
        requires_consent: true,
        gating_token: Some("arrival".to_string()),
        trigger: Trigger::Poi("frontier_drop_corner".to_string()),
        manual_trigger_id: Some("moment.drop".to_string()),
        priority: 90,
        cooldown_seconds: 240.0,
        metadata: None,
    }
}

fn t0() -> DateTime<Utc> {
    "2026-08-24T09:00:00Z".parse().unwrap()
}

#[test]
fn walkthrough_arrival_cooldown_and_gated_drop() {
    let mut engine = TriggerEngine::new(frontier_zone(), vec![arrival_moment(), drop_moment()]);
    let planner = Planner::new();
    let snapshot = MemorySnapshot::default();

    // At the entrance POI's exact center: the arrival moment fires.
    let at_entrance = Context::at(37.78974, -122.40046, t0());
    let decision = engine.evaluate(&at_entrance, &snapshot, t0());
    assert_eq!(decision.status, DecisionStatus::Triggered);
    let moment = decision.moment.clone().unwrap();
    assert_eq!(moment.id, "frontier.arrival");
    assert!(decision.explanation.contains("Frontier Tower Entrance"));
    assert_eq!(decision.consent_state, ConsentState::Awaiting);

    // The derived plan pairs the primary and secondary actions.
    let plan_decision = planner.plan(&at_entrance, &snapshot, &engine, t0());
    let plan = plan_decision.plan.unwrap();
    assert_eq!(plan.primary_action.id, "arrival.start");
    assert_eq!(plan.secondary_action.unwrap().id, "arrival.skip");
    assert_eq!(plan.source, "auto");

    // Surface it and the cooldown engages.
    engine.mark_delivered("frontier.arrival", t0());
    let during = engine.evaluate(&at_entrance, &snapshot, t0() + Duration::seconds(60));
    assert_eq!(during.status, DecisionStatus::NoMatch);
    assert_eq!(during.explanation, "Cooling down 1 moment(s).");

    // Boundary inclusive: exactly at the cooldown it fires again.
    let after = engine.evaluate(&at_entrance, &snapshot, t0() + Duration::seconds(120));
    assert_eq!(after.status, DecisionStatus::Triggered);

    // At the zone center no POI matches and no zone-wide moments exist.
    let at_center = Context::at(37.78975, -122.40055, t0());
    let decision = engine.evaluate(&at_center, &snapshot, t0());
    assert_eq!(decision.status, DecisionStatus::NoMatch);
    assert_eq!(decision.explanation, "No zone moments configured.");

    // The sky-lobby drop waits on the arrival token...
    let at_drop = Context::at(37.79092, -122.3992, t0());
    let decision = engine.evaluate(&at_drop, &snapshot, t0());
    assert_eq!(decision.status, DecisionStatus::NoMatch);
    assert_eq!(decision.explanation, "Waiting on tokens: ARRIVAL");

    // ...and unlocks once the token is granted.
    let snapshot = MemorySnapshot::with_tokens(["arrival"]);
    let decision = engine.evaluate(&at_drop, &snapshot, t0());
    assert_eq!(decision.status, DecisionStatus::Triggered);
    assert_eq!(decision.moment.unwrap().id, "frontier.drop");
}

#[test]
fn walkthrough_manual_trigger_path() {
    let mut engine = TriggerEngine::new(frontier_zone(), vec![arrival_moment(), drop_moment()]);
    let planner = Planner::new();

    // Manual invocation needs no location at all.
    let snapshot = MemorySnapshot::with_tokens(["arrival"]);
    let plan_decision = planner.plan_manual("moment.drop", &snapshot, &engine, t0());
    assert_eq!(plan_decision.status, DecisionStatus::Triggered);
    let plan = plan_decision.plan.unwrap();
    assert_eq!(plan.source, "moment.drop");
    assert_eq!(plan.primary_action.id, "drop.open");
    // Subtle-styled action still ranks into the secondary slot.
    assert_eq!(plan.secondary_action.unwrap().id, "drop.later");

    // Delivered: manual re-trigger reports remaining cooldown.
    engine.mark_delivered("frontier.drop", t0());
    let decision = engine.manual_trigger("moment.drop", &snapshot, t0() + Duration::seconds(100));
    assert_eq!(decision.status, DecisionStatus::NoMatch);
    assert_eq!(decision.consent_state, ConsentState::CoolingDown);
    assert_eq!(decision.explanation, "Cooling down 140s more.");

    // Ungranted token blocks manual invocation too.
    let decision = engine.manual_trigger("moment.drop", &MemorySnapshot::default(), t0());
    assert_eq!(decision.status, DecisionStatus::NoMatch);
    assert_eq!(decision.explanation, "Missing ARRIVAL token.");
}
