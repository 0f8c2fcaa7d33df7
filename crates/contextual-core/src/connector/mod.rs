//! Pluggable drop sources.
//!
//! Drops are anchored content (text, links, files) surfaced at a place.
//! Every source implements [`Connector`]; the decision core never calls
//! connectors itself -- the application layer fetches drops and reacts
//! through the memory store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::context::Context;

pub mod calendar;
pub mod drops;

pub use calendar::CalendarConnector;
pub use drops::KilroyDropsConnector;

/// Errors from a drop source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Source '{source_name}' unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropKind {
    Text,
    Link,
    Image,
    Pdf,
}

/// Where a drop is anchored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropAnchor {
    pub place_id: String,
    #[serde(default)]
    pub floor_band: Option<String>,
}

/// Drop content, tagged `{type, value}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum DropPayload {
    Text(String),
    #[serde(rename = "fileURL")]
    FileUrl(String),
}

/// A piece of anchored content offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drop {
    pub id: Uuid,
    pub title: String,
    pub kind: DropKind,
    pub payload: DropPayload,
    pub anchor: DropAnchor,
    #[serde(default)]
    pub permission_scope: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A pluggable drop source.
#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    /// Unique source name (e.g. "KilroyDrops", "Calendar").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Fetch the drops relevant to a context.
    async fn fetch_drops(&self, context: &Context) -> Result<Vec<Drop>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_format() {
        let payload = DropPayload::FileUrl("https://example.com/a.pdf".to_string());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "fileURL", "value": "https://example.com/a.pdf"})
        );

        let text: DropPayload =
            serde_json::from_value(serde_json::json!({"type": "text", "value": "hi"})).unwrap();
        assert_eq!(text, DropPayload::Text("hi".to_string()));
    }

    #[test]
    fn test_drop_wire_keys() {
        let drop = Drop {
            id: Uuid::new_v4(),
            title: "Welcome".to_string(),
            kind: DropKind::Text,
            payload: DropPayload::Text("hello".to_string()),
            anchor: DropAnchor {
                place_id: "frontier_tower".to_string(),
                floor_band: Some("SKY-LOBBY".to_string()),
            },
            permission_scope: Some("arrival".to_string()),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&drop).unwrap();
        assert!(json["anchor"].get("placeId").is_some());
        assert!(json["anchor"].get("floorBand").is_some());
        assert!(json.get("permissionScope").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
