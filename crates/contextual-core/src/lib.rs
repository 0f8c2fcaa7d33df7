//! # Contextual Core Library
//!
//! This library provides the core decision logic for Contextual, a
//! location-aware "moment" agent. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with
//! any GUI shell being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Geofence Model**: circular zones containing circular points of
//!   interest, answering containment and nearest-POI queries
//! - **Trigger Engine**: filters a moment catalog by trigger match,
//!   gating token, floor band and cooldown, then picks the best moment
//! - **Planner**: maps engine decisions into user-facing plans with a
//!   primary/secondary action pairing
//! - **Remote Planner**: HTTP boundary to an LLM-backed planner with a
//!   deterministic local fallback
//! - **Memory Store**: JSON-persisted likes/ignores/permission tokens
//!
//! ## Key Components
//!
//! - [`TriggerEngine`]: catalog evaluation and cooldown bookkeeping
//! - [`Planner`]: decision-to-plan mapping
//! - [`RemotePlanner`]: remote boundary with local fallback
//! - [`MemoryStore`]: snapshot persistence
//! - [`Connector`]: trait for pluggable drop sources

pub mod config;
pub mod connector;
pub mod context;
pub mod engine;
pub mod error;
pub mod events;
pub mod geo;
pub mod memory;
pub mod moment;
pub mod planner;
pub mod remote;

pub use config::Config;
pub use connector::{Connector, Drop, DropAnchor, DropKind, DropPayload, FetchError};
pub use context::{Context, ContextualId, MemorySnapshot};
pub use engine::{Decision, DecisionStatus, TriggerEngine};
pub use error::{ConfigError, CoreError, MemoryError, RemoteError, Result};
pub use events::{AgentEvent, EventKind, EventLog};
pub use geo::{Coordinate, PoiKind, PointOfInterest, Zone};
pub use memory::MemoryStore;
pub use moment::{ActionKind, ActionStyle, ConsentState, Moment, MomentAction, Trigger};
pub use planner::{Plan, PlanDecision, Planner};
pub use remote::{PlanRequest, PlanResponse, RemotePlanner};
