use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::diagnostics::{self, Category, Entry};
use crate::model::Project;

/// The persisted state blob
pub const STATE_FILE: &str = "state.json";
/// The flat-variant legacy blob: a bare taskId → bool map
pub const LEGACY_STATE_FILE: &str = "tasks.json";

/// Error type for state persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The one persisted, mutable entity: completion state plus the
/// currently selected project. Wire names match the original blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    /// taskId → completed; absent means incomplete
    #[serde(default)]
    pub task_states: HashMap<String, bool>,
    /// Selected project key, or None for the selection screen
    #[serde(default)]
    pub current_project: Option<String>,
}

/// Write-through store for [`SavedState`].
///
/// Loading never fails: missing or corrupt data falls back to defaults
/// (recording corrupt payloads in the diagnostics log). Every mutating
/// operation persists the whole blob synchronously before returning;
/// on a write failure the in-memory mutation stands and the error
/// propagates to the caller.
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    state: SavedState,
}

/// Default data directory: ~/.playbook
pub fn default_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".playbook"),
        None => PathBuf::from(".playbook"),
    }
}

impl Store {
    /// Load state from `dir`, falling back to safe defaults.
    pub fn load(dir: &Path) -> Store {
        let state = read_state(dir);
        Store {
            dir: dir.to_path_buf(),
            state,
        }
    }

    /// True iff the task is explicitly marked complete
    pub fn is_complete(&self, task_id: &str) -> bool {
        self.state.task_states.get(task_id).copied().unwrap_or(false)
    }

    /// Selected project key, if any
    pub fn current_project(&self) -> Option<&str> {
        self.state.current_project.as_deref()
    }

    /// Flip a task's completion (absent counts as incomplete, so the
    /// first toggle marks it complete), then persist. Returns the new
    /// value.
    pub fn toggle(&mut self, task_id: &str) -> Result<bool, StoreError> {
        let entry = self.state.task_states.entry(task_id.to_string()).or_insert(false);
        *entry = !*entry;
        let value = *entry;
        self.save()?;
        Ok(value)
    }

    /// Set or clear the selected project, then persist.
    pub fn select_project(&mut self, key: Option<&str>) -> Result<(), StoreError> {
        self.state.current_project = key.map(|k| k.to_string());
        self.save()
    }

    /// Clear completion state for one project's tasks, or everything,
    /// then persist.
    pub fn reset(&mut self, project: Option<&Project>) -> Result<(), StoreError> {
        match project {
            Some(p) => {
                for task in &p.tasks {
                    self.state.task_states.remove(&task.id);
                }
            }
            None => self.state.task_states.clear(),
        }
        self.save()
    }

    /// Serialize the whole blob, then replace state.json atomically.
    /// Never writes incrementally, so a failed save leaves the previous
    /// file intact.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.state)?;
        let path = self.dir.join(STATE_FILE);
        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| diagnostics::atomic_write(&path, content.as_bytes()));
        if let Err(e) = result {
            diagnostics::log_event(
                &self.dir,
                Entry::new(Category::Write, "state write failed")
                    .field("Target", STATE_FILE)
                    .field("Error", &e.to_string())
                    .body(&content),
            );
            return Err(StoreError::Write { path, source: e });
        }
        Ok(())
    }
}

/// Read the blob from disk. Missing → defaults. Corrupt → defaults plus
/// a diagnostics entry carrying the unreadable payload. A legacy
/// flat-variant tasks.json is migrated once into the current schema.
fn read_state(dir: &Path) -> SavedState {
    let path = dir.join(STATE_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                diagnostics::log_event(
                    dir,
                    Entry::new(Category::Parse, "state blob unreadable")
                        .field("Source", STATE_FILE)
                        .field("Error", &e.to_string())
                        .body(&content),
                );
                SavedState::default()
            }
        },
        Err(_) => read_legacy_state(dir),
    }
}

fn read_legacy_state(dir: &Path) -> SavedState {
    let path = dir.join(LEGACY_STATE_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return SavedState::default(),
    };

    match serde_json::from_str::<HashMap<String, bool>>(&content) {
        Ok(task_states) => {
            let state = SavedState {
                task_states,
                current_project: None,
            };
            diagnostics::log_event(
                dir,
                Entry::new(Category::Migrate, "legacy state migrated")
                    .field("Source", LEGACY_STATE_FILE)
                    .field("Target", STATE_FILE),
            );
            // Persist under the new schema right away; the legacy file is
            // left in place and ignored from now on.
            let store = Store {
                dir: dir.to_path_buf(),
                state: state.clone(),
            };
            if let Err(e) = store.save() {
                eprintln!("warning: could not persist migrated state: {}", e);
            }
            state
        }
        Err(e) => {
            diagnostics::log_event(
                dir,
                Entry::new(Category::Parse, "legacy state unreadable")
                    .field("Source", LEGACY_STATE_FILE)
                    .field("Error", &e.to_string())
                    .body(&content),
            );
            SavedState::default()
        }
    }
}
