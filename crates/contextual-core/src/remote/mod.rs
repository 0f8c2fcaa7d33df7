//! Remote planner boundary.
//!
//! An external relay exposes `POST {base}/agent/plan`, accepting the
//! same context/memory/recent-events payload the local evaluator
//! consumes and returning an LLM-produced decision in the same shape.
//! The core never embeds the model call; it validates the response
//! through the shared decision-to-plan mapping and deterministically
//! falls back to the local evaluator on any failure.

pub mod client;
pub mod types;

pub use client::RemotePlanner;
pub use types::{PlanRequest, PlanResponse};
