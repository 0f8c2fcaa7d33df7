//! Moment catalog types.
//!
//! A moment is a candidate contextual prompt: trigger conditions, an
//! optional gating token, a cooldown, and the actions offered to the
//! user when it fires. Serde keys match the wire format consumed by the
//! remote planner relay, so these shapes round-trip against it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What tapping an action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    OpenCard,
    OpenDrop,
    #[serde(rename = "openURL")]
    OpenUrl,
    Acknowledge,
}

/// Visual weight of an action; also its selection rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionStyle {
    Primary,
    Secondary,
    Subtle,
}

impl ActionStyle {
    /// Selection rank: primary before secondary before subtle.
    pub fn rank(&self) -> u8 {
        match self {
            ActionStyle::Primary => 0,
            ActionStyle::Secondary => 1,
            ActionStyle::Subtle => 2,
        }
    }
}

/// One user-facing action offered by a moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentAction {
    pub id: String,
    pub title: String,
    pub kind: ActionKind,
    pub style: ActionStyle,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
}

impl MomentAction {
    pub fn new(title: impl Into<String>, kind: ActionKind, style: ActionStyle) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            style,
            payload: None,
            icon_name: None,
        }
    }
}

/// When a moment is eligible to fire.
///
/// `Manual` moments never match automatic evaluation; they are reached
/// only through [`crate::TriggerEngine::manual_trigger`], which keys off
/// the separate `manual_trigger_id` field on [`Moment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Trigger {
    ZoneEntry,
    Poi(String),
    Manual(String),
}

/// Whether the user has been asked about and responded to a surfaced
/// moment. The relay historically emitted `denied` for `ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentState {
    Idle,
    Awaiting,
    Granted,
    #[serde(alias = "denied")]
    Ignored,
    CoolingDown,
}

/// A candidate contextual prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Opaque key identifying a narration clip; playback is the shell's
    /// concern.
    #[serde(default)]
    pub whisper_audio_key: Option<String>,
    pub host_line: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub actions: Vec<MomentAction>,
    #[serde(default = "default_requires_consent")]
    pub requires_consent: bool,
    /// When present, the moment is locked until this token exists in
    /// the memory snapshot.
    #[serde(default)]
    pub gating_token: Option<String>,
    pub trigger: Trigger,
    /// Separate addressing for external manual invocation. Deliberately
    /// independent of `Trigger::Manual`.
    #[serde(default, rename = "manualTriggerID")]
    pub manual_trigger_id: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: f64,
    /// Free-form tags; `floorBand` is the one the engine reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

fn default_requires_consent() -> bool {
    true
}

fn default_cooldown_seconds() -> f64 {
    60.0
}

impl Moment {
    /// Floor band this moment requires, if any.
    pub fn required_floor_band(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("floorBand"))
            .map(String::as_str)
    }
}
