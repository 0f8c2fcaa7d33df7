//! Mock calendar feed connector.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::connector::{Connector, Drop, DropAnchor, DropKind, DropPayload, FetchError};
use crate::context::Context;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct CalendarConnector {
    clock: Clock,
}

impl CalendarConnector {
    pub fn new() -> Self {
        Self {
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for CalendarConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Connector for CalendarConnector {
    fn name(&self) -> &str {
        "Calendar"
    }

    fn description(&self) -> &str {
        "Mock calendar feed"
    }

    async fn fetch_drops(&self, context: &Context) -> Result<Vec<Drop>, FetchError> {
        let now = (self.clock)();
        Ok(vec![Drop {
            id: Uuid::new_v4(),
            title: "Upcoming walkthrough".to_string(),
            kind: DropKind::Text,
            payload: DropPayload::Text(
                "Aru blocked 30 min on your calendar to rehearse the walk.".to_string(),
            ),
            anchor: DropAnchor {
                place_id: context
                    .place_id
                    .clone()
                    .unwrap_or_else(|| "frontier_tower".to_string()),
                floor_band: context.floor_band.clone(),
            },
            permission_scope: None,
            created_at: now,
        }])
    }
}
