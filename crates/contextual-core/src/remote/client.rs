//! HTTP client for the remote planner relay.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::AbortHandle;
use url::Url;

use crate::engine::{DecisionStatus, TriggerEngine};
use crate::error::RemoteError;
use crate::moment::ConsentState;
use crate::planner::{build_plan, PlanDecision, Planner};
use crate::remote::types::{PlanRequest, PlanResponse};

/// Client for `POST {base}/agent/plan`.
///
/// A newly issued request supersedes the in-flight one: the older call
/// resolves to [`RemoteError::Superseded`] instead of racing the newer
/// decision.
pub struct RemotePlanner {
    client: reqwest::Client,
    endpoint: Url,
    inflight: Mutex<Option<AbortHandle>>,
}

impl RemotePlanner {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, RemoteError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let endpoint = Url::parse(&base)
            .and_then(|u| u.join("agent/plan"))
            .map_err(|_| RemoteError::InvalidEndpoint(base_url.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            inflight: Mutex::new(None),
        })
    }

    /// Send a plan request, aborting any request still in flight.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, RemoteError> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = request.clone();

        let task = tokio::spawn(async move { send(client, endpoint, body).await });

        {
            let mut inflight = self
                .inflight
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(previous) = inflight.replace(task.abort_handle()) {
                previous.abort();
            }
        }

        match task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(RemoteError::Superseded),
            Err(err) => Err(RemoteError::Malformed(err.to_string())),
        }
    }

    /// Ask the relay for a plan; on any failure, substitute the local
    /// evaluator with the same inputs. The substitution is logged and
    /// never surfaces as a missing decision.
    pub async fn plan_with_fallback(
        &self,
        request: &PlanRequest,
        engine: &TriggerEngine,
        planner: &Planner,
        now: DateTime<Utc>,
    ) -> PlanDecision {
        match self.plan(request).await.and_then(normalize) {
            Ok(decision) => decision,
            Err(err) => {
                tracing::warn!(error = %err, "remote planner failed, using local evaluator");
                match request.manual_id.as_deref() {
                    Some(manual_id) => {
                        planner.plan_manual(manual_id, &request.memory, engine, now)
                    }
                    None => planner.plan(&request.context, &request.memory, engine, now),
                }
            }
        }
    }
}

async fn send(
    client: reqwest::Client,
    endpoint: Url,
    body: PlanRequest,
) -> Result<PlanResponse, RemoteError> {
    let response = client.post(endpoint).json(&body).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteError::BadStatus {
            status: status.as_u16(),
            body,
        });
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Validate a relay response into the uniform plan-decision shape.
/// Triggered responses without a plan get one built from the returned
/// moment with source "remote".
pub fn normalize(response: PlanResponse) -> Result<PlanDecision, RemoteError> {
    let status = match response.status.as_str() {
        "triggered" => DecisionStatus::Triggered,
        "missingLocation" => DecisionStatus::MissingLocation,
        "outsideZone" => DecisionStatus::OutsideZone,
        "noMatch" => DecisionStatus::NoMatch,
        other => {
            return Err(RemoteError::Malformed(format!(
                "unknown status '{other}'"
            )));
        }
    };

    if status != DecisionStatus::Triggered {
        return Ok(PlanDecision {
            status,
            moment: response.moment,
            plan: None,
            explanation: response.explanation,
            consent_state: response.consent_state.unwrap_or(ConsentState::Idle),
            eligibility: response.eligibility.unwrap_or(false),
        });
    }

    let Some(moment) = response.moment else {
        return Err(RemoteError::Malformed(
            "triggered response without a moment".to_string(),
        ));
    };

    let plan = response
        .plan
        .unwrap_or_else(|| build_plan(&moment, "remote"));

    Ok(PlanDecision {
        status,
        moment: Some(moment),
        plan: Some(plan),
        explanation: response.explanation,
        consent_state: response.consent_state.unwrap_or(ConsentState::Awaiting),
        eligibility: response.eligibility.unwrap_or(true),
    })
}
