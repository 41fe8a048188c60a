//! Load and save the player document.
//!
//! Loading never fails: a missing key, an unreadable store or malformed JSON
//! all yield a default `PlayerState`.

use super::KeyValueStore;
use crate::error::CoreError;
use crate::state::PlayerState;

/// Storage key of the player document.
pub const DOCUMENT_KEY: &str = "soloLevelingGame";

pub struct DocumentStore<S> {
    store: S,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Read the stored document merged over defaults.
    pub fn load(&self) -> PlayerState {
        let raw = match self.store.get(DOCUMENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return PlayerState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read player document, starting fresh");
                return PlayerState::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "player document is malformed, starting fresh");
                PlayerState::default()
            }
        }
    }

    /// Write the whole document.
    ///
    /// # Errors
    /// Returns an error if serialization or the store write fails.
    pub fn save(&mut self, state: &PlayerState) -> Result<(), CoreError> {
        let json = serde_json::to_string(state)?;
        self.store.set(DOCUMENT_KEY, &json)?;
        Ok(())
    }

    /// Remove the stored document.
    ///
    /// # Errors
    /// Returns an error if the store delete fails.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.store.remove(DOCUMENT_KEY)?;
        Ok(())
    }
}
