//! Demo venue fixtures: zones, POIs and moment catalogs.
//!
//! Content authoring lives here in the CLI, not in the core -- the
//! engine takes whatever zone and catalog the caller hands it.

use std::collections::HashMap;

use contextual_core::{
    ActionKind, ActionStyle, Coordinate, Moment, MomentAction, PoiKind, PointOfInterest, Trigger,
    Zone,
};

/// A named zone plus its moment catalog.
pub struct Venue {
    pub id: &'static str,
    pub name: &'static str,
    pub zone: Zone,
    pub moments: Vec<Moment>,
    pub notes: &'static str,
}

pub fn venue(id: &str) -> Option<Venue> {
    venues().into_iter().find(|v| v.id == id)
}

pub fn venues() -> Vec<Venue> {
    vec![
        Venue {
            id: "frontier",
            name: "Frontier Tower",
            zone: frontier_zone(),
            moments: frontier_moments(),
            notes: "Members' tower, 16 floors, dense easter eggs.",
        },
        Venue {
            id: "aws-loft",
            name: "AWS Loft (525 Market, Floor 2)",
            zone: aws_loft_zone(),
            moments: aws_loft_moments(),
            notes: "Llama Lounge demo space.",
        },
    ]
}

fn meta(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[allow(clippy::too_many_arguments)]
fn poi(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    radius: f64,
    kind: PoiKind,
    hint: &str,
    band: &str,
) -> PointOfInterest {
    PointOfInterest {
        id: id.to_string(),
        name: name.to_string(),
        coordinate: Coordinate::new(lat, lon),
        radius_meters: radius,
        kind,
        metadata: meta(&[("hint", hint), ("floorBand", band)]),
    }
}

fn act(
    id: &str,
    title: &str,
    kind: ActionKind,
    style: ActionStyle,
    payload: Option<&str>,
    icon: Option<&str>,
) -> MomentAction {
    MomentAction {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        style,
        payload: payload.map(String::from),
        icon_name: icon.map(String::from),
    }
}

fn frontier_zone() -> Zone {
    Zone {
        id: "frontier-walk-zone".to_string(),
        display_name: "Frontier Tower".to_string(),
        center: Coordinate::new(37.78975, -122.40055),
        radius_meters: 260.0,
        pois: vec![
            poi(
                "frontier_arrival",
                "Frontier Tower Entrance",
                37.78974,
                -122.40046,
                3.0,
                PoiKind::Arrival,
                "Market St doors",
                "FT-LOBBY",
            ),
            poi(
                "frontier_lobby_desk",
                "Lobby Check-In Desk",
                37.78977,
                -122.40051,
                1.2,
                PoiKind::Custom,
                "badge desk",
                "FT-LOBBY",
            ),
            poi(
                "frontier_elevator_bank",
                "Elevator Bank",
                37.78979,
                -122.40058,
                1.2,
                PoiKind::Custom,
                "left elevators",
                "FT-LOBBY",
            ),
            poi(
                "frontier_coffee",
                "Steep + Brew Nook",
                37.79063,
                -122.40182,
                2.5,
                PoiKind::Coffee,
                "quiet side street bench",
                "FT-2",
            ),
            poi(
                "frontier_kitchen",
                "Member Kitchen",
                37.78986,
                -122.40044,
                1.2,
                PoiKind::Custom,
                "espresso machine",
                "FT-5",
            ),
            poi(
                "frontier_podcast",
                "Podcast Nook",
                37.78988,
                -122.40062,
                1.2,
                PoiKind::Custom,
                "soundproof corner",
                "FT-5",
            ),
            poi(
                "frontier_drop_corner",
                "Sky Lobby Drop",
                37.79092,
                -122.3992,
                2.5,
                PoiKind::Drop,
                "follow the reflective fins",
                "FT-12",
            ),
            poi(
                "frontier_rooftop",
                "Skyline View",
                37.78971,
                -122.4007,
                1.2,
                PoiKind::Custom,
                "north corner",
                "FT-16",
            ),
        ],
        notes: Some("Hard-coded lat/long for Frontier Tower demo. Micro-radii are ~4 ft.".to_string()),
    }
}

fn frontier_moments() -> Vec<Moment> {
    vec![
        Moment {
            id: "frontier.arrival".to_string(),
            title: "Welcome to Frontier Tower".to_string(),
            subtitle: Some("Market St entrance".to_string()),
            whisper_audio_key: Some("psst_welcome_frontier".to_string()),
            host_line: "Tink: You are at Frontier. Want the quick orientation?".to_string(),
            detail: Some(
                "Wave hello, grab your badge, and the lobby guide will flag the Kilroy liaison."
                    .to_string(),
            ),
            actions: vec![
                act(
                    "arrival.start",
                    "Start walkthrough",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("arrival_brief"),
                    Some("figure.walk.motion"),
                ),
                act(
                    "arrival.skip",
                    "Not now",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    Some("clock"),
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("frontier_arrival".to_string()),
            manual_trigger_id: Some("moment.arrival".to_string()),
            priority: 100,
            cooldown_seconds: 120.0,
            metadata: meta(&[("poi", "frontier_arrival"), ("floorBand", "FT-LOBBY")]),
        },
        Moment {
            id: "frontier.lobby".to_string(),
            title: "Frontier check-in is ready".to_string(),
            subtitle: Some("Lobby desk".to_string()),
            whisper_audio_key: Some("psst_drop_here".to_string()),
            host_line: "Tink: I can prefill your badge. Want me to check you in?".to_string(),
            detail: Some("One tap and the desk will know you are here.".to_string()),
            actions: vec![
                act(
                    "lobby.checkin",
                    "Check me in",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("frontier_checkin"),
                    Some("person.badge.plus"),
                ),
                act(
                    "lobby.skip",
                    "Later",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: Some("frontier".to_string()),
            trigger: Trigger::Poi("frontier_lobby_desk".to_string()),
            manual_trigger_id: None,
            priority: 70,
            cooldown_seconds: 240.0,
            metadata: meta(&[("poi", "frontier_lobby_desk"), ("floorBand", "FT-LOBBY")]),
        },
        Moment {
            id: "frontier.coffee".to_string(),
            title: "Need a quiet nook?".to_string(),
            subtitle: Some("Steep + Brew".to_string()),
            whisper_audio_key: Some("psst_drop_here".to_string()),
            host_line: "Tink: There is a calm coffee perch nearby. Want the pin?".to_string(),
            detail: Some(
                "We marked a bench tucked away from Market Street wind. Great for a prep reset."
                    .to_string(),
            ),
            actions: vec![
                act(
                    "coffee.navigate",
                    "Guide me there",
                    ActionKind::OpenUrl,
                    ActionStyle::Primary,
                    Some("maps://?ll=37.79063,-122.40182"),
                    Some("mappin.and.ellipse"),
                ),
                act(
                    "coffee.skip",
                    "I am good",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("frontier_coffee".to_string()),
            manual_trigger_id: Some("moment.coffee".to_string()),
            priority: 80,
            cooldown_seconds: 180.0,
            metadata: meta(&[("poi", "frontier_coffee"), ("floorBand", "FT-2")]),
        },
        Moment {
            id: "frontier.drop".to_string(),
            title: "Frontier drop unlocked".to_string(),
            subtitle: Some("Sky Lobby briefing".to_string()),
            whisper_audio_key: Some("psst_want_to_open".to_string()),
            host_line: "Tink: Kilroy left a media drop upstairs. Want me to open it?".to_string(),
            detail: Some(
                "Requires the Arrival token. We will keep the link warm for 10 minutes after consent."
                    .to_string(),
            ),
            actions: vec![
                act(
                    "drop.open",
                    "Open drop",
                    ActionKind::OpenDrop,
                    ActionStyle::Primary,
                    Some("kilroy.frontier.sky"),
                    None,
                ),
                act(
                    "drop.later",
                    "Save for later",
                    ActionKind::Acknowledge,
                    ActionStyle::Subtle,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: Some("arrival".to_string()),
            trigger: Trigger::Poi("frontier_drop_corner".to_string()),
            manual_trigger_id: Some("moment.drop".to_string()),
            priority: 90,
            cooldown_seconds: 240.0,
            metadata: meta(&[
                ("poi", "frontier_drop_corner"),
                ("drop_id", "kilroy.frontier.sky"),
                ("floorBand", "FT-12"),
            ]),
        },
        Moment {
            id: "frontier.podcast".to_string(),
            title: "Podcast studio is open".to_string(),
            subtitle: Some("Floor 5".to_string()),
            whisper_audio_key: Some("psst_want_to_open".to_string()),
            host_line: "Tink: The podcast nook is free for 20 minutes. Want me to hold it?"
                .to_string(),
            detail: Some("One tap reserves the quiet space.".to_string()),
            actions: vec![
                act(
                    "podcast.reserve",
                    "Reserve it",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("frontier_podcast_hold"),
                    None,
                ),
                act(
                    "podcast.skip",
                    "Not now",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: Some("frontier".to_string()),
            trigger: Trigger::Poi("frontier_podcast".to_string()),
            manual_trigger_id: None,
            priority: 60,
            cooldown_seconds: 300.0,
            metadata: meta(&[("poi", "frontier_podcast"), ("floorBand", "FT-5")]),
        },
        Moment {
            id: "frontier.skyline".to_string(),
            title: "Skyline easter egg".to_string(),
            subtitle: Some("Top floor".to_string()),
            whisper_audio_key: Some("psst_want_to_open".to_string()),
            host_line: "Tink: If you look up, the skyline is insane right now.".to_string(),
            detail: Some("Tink only speaks here if the sunset is glowing.".to_string()),
            actions: vec![
                act(
                    "skyline.look",
                    "I see it",
                    ActionKind::Acknowledge,
                    ActionStyle::Primary,
                    None,
                    None,
                ),
                act(
                    "skyline.skip",
                    "Later",
                    ActionKind::Acknowledge,
                    ActionStyle::Subtle,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("frontier_rooftop".to_string()),
            manual_trigger_id: None,
            priority: 50,
            cooldown_seconds: 300.0,
            metadata: meta(&[("poi", "frontier_rooftop"), ("floorBand", "FT-16")]),
        },
    ]
}

fn aws_loft_zone() -> Zone {
    Zone {
        id: "aws-loft-zone".to_string(),
        display_name: "AWS Loft (525 Market)".to_string(),
        center: Coordinate::new(37.7905075, -122.3991580),
        radius_meters: 160.0,
        pois: vec![
            poi(
                "aws_front_door",
                "AWS Loft Front Door",
                37.79048,
                -122.39919,
                3.0,
                PoiKind::Arrival,
                "Market St entry",
                "AWS-1",
            ),
            poi(
                "aws_lobby_checkin",
                "Building Lobby Check-In",
                37.79053,
                -122.39914,
                1.2,
                PoiKind::Custom,
                "security desk",
                "AWS-1",
            ),
            poi(
                "aws_elevator",
                "Elevator Bank",
                37.79055,
                -122.3992,
                1.2,
                PoiKind::Custom,
                "right elevators",
                "AWS-1",
            ),
            poi(
                "aws_loft_entry",
                "AWS Loft Entry",
                37.7906,
                -122.39912,
                2.0,
                PoiKind::Drop,
                "loft doors",
                "AWS-2",
            ),
            poi(
                "aws_stage",
                "Llama Lounge Stage",
                37.79062,
                -122.39906,
                1.2,
                PoiKind::Custom,
                "demo stage",
                "AWS-2",
            ),
            poi(
                "aws_window_lounge",
                "Window Lounge",
                37.79057,
                -122.39901,
                1.2,
                PoiKind::Coffee,
                "sunset corner",
                "AWS-2",
            ),
        ],
        notes: Some("AWS Loft at 525 Market St. Loft floor is 2nd floor.".to_string()),
    }
}

fn aws_loft_moments() -> Vec<Moment> {
    vec![
        Moment {
            id: "aws.arrival".to_string(),
            title: "Welcome to Llama Lounge".to_string(),
            subtitle: Some("AWS Loft entrance".to_string()),
            whisper_audio_key: Some("psst_welcome_frontier".to_string()),
            host_line: "Tink: You are at the AWS Loft. Want the fastest check-in path?".to_string(),
            detail: Some("I can steer you past the lobby queue if your Luma token is ready.".to_string()),
            actions: vec![
                act(
                    "aws.arrival.checkin",
                    "Get me in",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("aws_loft_checkin"),
                    None,
                ),
                act(
                    "aws.arrival.skip",
                    "Not yet",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("aws_front_door".to_string()),
            manual_trigger_id: Some("moment.arrival".to_string()),
            priority: 100,
            cooldown_seconds: 120.0,
            metadata: meta(&[("poi", "aws_front_door"), ("floorBand", "AWS-1")]),
        },
        Moment {
            id: "aws.lobby".to_string(),
            title: "Lobby check-in ready".to_string(),
            subtitle: Some("525 Market".to_string()),
            whisper_audio_key: Some("psst_drop_here".to_string()),
            host_line: "Tink: I can hand the desk your Luma pass. Want me to?".to_string(),
            detail: Some("Requires LUMA token for the event.".to_string()),
            actions: vec![
                act(
                    "aws.lobby.send",
                    "Send pass",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("luma_pass"),
                    None,
                ),
                act(
                    "aws.lobby.skip",
                    "Later",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: Some("luma".to_string()),
            trigger: Trigger::Poi("aws_lobby_checkin".to_string()),
            manual_trigger_id: Some("moment.coffee".to_string()),
            priority: 85,
            cooldown_seconds: 180.0,
            metadata: meta(&[("poi", "aws_lobby_checkin"), ("floorBand", "AWS-1")]),
        },
        Moment {
            id: "aws.loft".to_string(),
            title: "Loft floor unlocked".to_string(),
            subtitle: Some("2nd floor".to_string()),
            whisper_audio_key: Some("psst_want_to_open".to_string()),
            host_line: "Tink: The Loft is live. Want a quick map of the vibe?".to_string(),
            detail: Some("Requires AMAZON token for member access.".to_string()),
            actions: vec![
                act(
                    "aws.loft.map",
                    "Show me",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("aws_loft_map"),
                    None,
                ),
                act(
                    "aws.loft.skip",
                    "Not now",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: Some("amazon".to_string()),
            trigger: Trigger::Poi("aws_loft_entry".to_string()),
            manual_trigger_id: Some("moment.drop".to_string()),
            priority: 90,
            cooldown_seconds: 240.0,
            metadata: meta(&[("poi", "aws_loft_entry"), ("floorBand", "AWS-2")]),
        },
        Moment {
            id: "aws.stage".to_string(),
            title: "Stage moment".to_string(),
            subtitle: Some("Llama Lounge".to_string()),
            whisper_audio_key: Some("psst_want_to_open".to_string()),
            host_line: "Tink: The stage is open. Want to peek at the next demo slot?".to_string(),
            detail: Some("Only surfaced when you are near the stage.".to_string()),
            actions: vec![
                act(
                    "aws.stage.peek",
                    "Peek",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("aws_stage_lineup"),
                    None,
                ),
                act(
                    "aws.stage.skip",
                    "Later",
                    ActionKind::Acknowledge,
                    ActionStyle::Secondary,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("aws_stage".to_string()),
            manual_trigger_id: None,
            priority: 60,
            cooldown_seconds: 180.0,
            metadata: meta(&[("poi", "aws_stage"), ("floorBand", "AWS-2")]),
        },
        Moment {
            id: "aws.window".to_string(),
            title: "Window lounge easter egg".to_string(),
            subtitle: Some("Loft corner".to_string()),
            whisper_audio_key: Some("psst_drop_here".to_string()),
            host_line: "Tink: The window lounge is open and quiet if you need a reset.".to_string(),
            detail: Some("A small calm zone away from the crowd.".to_string()),
            actions: vec![
                act(
                    "aws.window.mark",
                    "Mark it",
                    ActionKind::OpenCard,
                    ActionStyle::Primary,
                    Some("aws_window_lounge"),
                    None,
                ),
                act(
                    "aws.window.skip",
                    "Skip",
                    ActionKind::Acknowledge,
                    ActionStyle::Subtle,
                    None,
                    None,
                ),
            ],
            requires_consent: true,
            gating_token: None,
            trigger: Trigger::Poi("aws_window_lounge".to_string()),
            manual_trigger_id: None,
            priority: 50,
            cooldown_seconds: 180.0,
            metadata: meta(&[("poi", "aws_window_lounge"), ("floorBand", "AWS-2")]),
        },
    ]
}
