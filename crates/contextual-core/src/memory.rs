//! JSON-persisted memory store.
//!
//! Holds the user's drop reactions and granted permission tokens. The
//! engine never reads this store directly; callers take a
//! [`MemorySnapshot`] and pass it into each evaluation, so there is no
//! observer coupling between storage and the decision path.
//!
//! The snapshot lives at `~/.config/contextual/memory.json`
//! (`contextual-dev` when `CONTEXTUAL_ENV=dev`).

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::context::MemorySnapshot;
use crate::error::MemoryError;

/// Returns `~/.config/contextual[-dev]/` based on CONTEXTUAL_ENV.
///
/// Set CONTEXTUAL_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, MemoryError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CONTEXTUAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("contextual-dev")
    } else {
        base_dir.join("contextual")
    };

    std::fs::create_dir_all(&dir).map_err(|e| MemoryError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// File-backed store for the memory snapshot. Every mutation persists.
pub struct MemoryStore {
    path: PathBuf,
    snapshot: MemorySnapshot,
}

impl MemoryStore {
    /// Open the store at the default location.
    pub fn open() -> Result<Self, MemoryError> {
        let path = data_dir()?.join("memory.json");
        Self::with_path(path)
    }

    /// Open the store at an explicit path; a missing or undecodable file
    /// starts from an empty snapshot.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, MemoryError> {
        let path = path.into();
        let snapshot = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => MemorySnapshot::default(),
        };
        let mut store = Self { path, snapshot };
        store.persist()?;
        Ok(store)
    }

    /// Current snapshot value, to be passed into evaluations.
    pub fn snapshot(&self) -> MemorySnapshot {
        self.snapshot.clone()
    }

    /// Mark a drop liked, clearing any ignore.
    pub fn like(&mut self, drop_id: Uuid) -> Result<(), MemoryError> {
        self.mutate(|s| {
            s.liked_drops.insert(drop_id);
            s.ignored_drops.remove(&drop_id);
        })
    }

    /// Mark a drop ignored, clearing any like.
    pub fn ignore(&mut self, drop_id: Uuid) -> Result<(), MemoryError> {
        self.mutate(|s| {
            s.ignored_drops.insert(drop_id);
            s.liked_drops.remove(&drop_id);
        })
    }

    /// Remove any reaction for a drop.
    pub fn clear_reaction(&mut self, drop_id: Uuid) -> Result<(), MemoryError> {
        self.mutate(|s| {
            s.liked_drops.remove(&drop_id);
            s.ignored_drops.remove(&drop_id);
        })
    }

    /// Record a granted permission token, unlocking gated moments.
    pub fn record_permission_token(&mut self, token: impl Into<String>) -> Result<(), MemoryError> {
        let token = token.into();
        self.mutate(|s| {
            s.permission_tokens.insert(token);
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Likes: {}  •  Ignores: {}  •  Tokens: {}",
            self.snapshot.liked_drops.len(),
            self.snapshot.ignored_drops.len(),
            self.snapshot.permission_tokens.len()
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut MemorySnapshot)) -> Result<(), MemoryError> {
        apply(&mut self.snapshot);
        self.snapshot.last_updated = Utc::now();
        self.persist()
    }

    /// Write through a temp file and rename so readers never see a
    /// partial snapshot.
    fn persist(&self) -> Result<(), MemoryError> {
        let data = serde_json::to_string_pretty(&self.snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data).map_err(|source| MemoryError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| MemoryError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
