//! Kilroy drops source: physical arrival experiences.
//!
//! Serves place-gated fixtures filtered by the context's floor band.
//! The clock is injectable so tests get stable creation timestamps.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::connector::{Connector, Drop, DropAnchor, DropKind, DropPayload, FetchError};
use crate::context::Context;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct KilroyDropsConnector {
    place_id: String,
    clock: Clock,
}

impl KilroyDropsConnector {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_clock(place_id: impl Into<String>, clock: Clock) -> Self {
        Self {
            place_id: place_id.into(),
            clock,
        }
    }

    fn kilroy_drops(&self) -> Vec<Drop> {
        let timestamp = (self.clock)();
        vec![
            Drop {
                id: Uuid::new_v4(),
                title: "Welcome to Frontier Tower".to_string(),
                kind: DropKind::Text,
                payload: DropPayload::Text(
                    "Your walkthrough starts on arrival. Pick up your badge and follow the haptics."
                        .to_string(),
                ),
                anchor: DropAnchor {
                    place_id: self.place_id.clone(),
                    floor_band: None,
                },
                permission_scope: Some("arrival".to_string()),
                created_at: timestamp,
            },
            Drop {
                id: Uuid::new_v4(),
                title: "Sky Lobby Orientation".to_string(),
                kind: DropKind::Link,
                payload: DropPayload::Text("kilroy://drops/frontier/sky-lobby".to_string()),
                anchor: DropAnchor {
                    place_id: self.place_id.clone(),
                    floor_band: Some("SKY-LOBBY".to_string()),
                },
                permission_scope: Some("sky-pass".to_string()),
                created_at: timestamp,
            },
            Drop {
                id: Uuid::new_v4(),
                title: "Summit Floor Briefing".to_string(),
                kind: DropKind::Pdf,
                payload: DropPayload::FileUrl(
                    "https://kilroy.example.com/files/frontier/summit.pdf".to_string(),
                ),
                anchor: DropAnchor {
                    place_id: self.place_id.clone(),
                    floor_band: Some("SUMMIT".to_string()),
                },
                permission_scope: Some("summit-clearance".to_string()),
                created_at: timestamp,
            },
        ]
    }
}

impl Default for KilroyDropsConnector {
    fn default() -> Self {
        Self::new("frontier_tower")
    }
}

#[async_trait::async_trait]
impl Connector for KilroyDropsConnector {
    fn name(&self) -> &str {
        "KilroyDrops"
    }

    fn description(&self) -> &str {
        "Physical arrival experiences"
    }

    async fn fetch_drops(&self, context: &Context) -> Result<Vec<Drop>, FetchError> {
        // Wrong place: nothing to offer.
        if let Some(place_id) = &context.place_id {
            if place_id != &self.place_id {
                return Ok(vec![]);
            }
        }

        let drops = self.kilroy_drops();
        let Some(floor_band) = &context.floor_band else {
            return Ok(drops);
        };

        Ok(drops
            .into_iter()
            .filter(|d| {
                d.anchor
                    .floor_band
                    .as_ref()
                    .map_or(true, |band| band == floor_band)
            })
            .collect())
    }
}
