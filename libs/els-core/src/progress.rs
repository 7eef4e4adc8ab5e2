//! Per-unit progress and identity prefill over a plain key-value capability.
//!
//! The store mirrors the browser's localStorage contract: string keys and
//! values, no transactions, last write wins. Completion flags are only ever
//! raised, never lowered.

use std::collections::HashMap;

use crate::session::{SessionOutcome, SessionStatus};

pub const NAME_KEY: &str = "elsName";
pub const SURNAME_KEY: &str = "elsSurname";
pub const VOICE_KEY: &str = "elsPreferredVoice";

/// External key-value persistence capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

fn completed_key(unit_id: u32) -> String {
    format!("unit_{unit_id}_completed")
}

fn progress_key(unit_id: u32) -> String {
    format!("unit_{unit_id}_progress")
}

pub fn unit_completed(store: &impl KeyValueStore, unit_id: u32) -> bool {
    store.get(&completed_key(unit_id)).as_deref() == Some("true")
}

/// Progress percent for a unit, 0 when absent or unparseable.
pub fn unit_progress(store: &impl KeyValueStore, unit_id: u32) -> u8 {
    store
        .get(&progress_key(unit_id))
        .and_then(|v| v.parse::<u8>().ok())
        .map(|v| v.min(100))
        .unwrap_or(0)
}

pub fn record_unit_completion(store: &mut impl KeyValueStore, unit_id: u32) {
    store.set(&completed_key(unit_id), "true");
    store.set(&progress_key(unit_id), "100");
}

/// Persist a unit completion when — and only when — a non-grand-test session
/// for a unit finished naturally.
pub fn apply_outcome(store: &mut impl KeyValueStore, outcome: &SessionOutcome) {
    if outcome.status != SessionStatus::Completed || outcome.mode.is_grand_test {
        return;
    }
    if let Some(unit) = &outcome.mode.unit {
        record_unit_completion(store, unit.id);
    }
}

/// Saved name and surname for entry-form prefill.
pub fn saved_prefill(store: &impl KeyValueStore) -> (Option<String>, Option<String>) {
    (store.get(NAME_KEY), store.get(SURNAME_KEY))
}

pub fn save_prefill(store: &mut impl KeyValueStore, name: &str, surname: &str) {
    store.set(NAME_KEY, name);
    store.set(SURNAME_KEY, surname);
}

pub fn preferred_voice(store: &impl KeyValueStore) -> Option<String> {
    store.get(VOICE_KEY)
}

pub fn set_preferred_voice(store: &mut impl KeyValueStore, voice_name: &str) {
    store.set(VOICE_KEY, voice_name);
}
