//! Session facade.
//!
//! `Game` owns the player document for the lifetime of a session and runs
//! every user command against it. Commands are all-or-nothing: the document
//! is saved before a command returns, and if the save fails the in-memory
//! document is rolled back to what it was before the command.

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::presenter::{present, Presenter};
use crate::quest::Difficulty;
use crate::state::PlayerState;
use crate::storage::{DocumentStore, KeyValueStore};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this quest?";
pub const RESET_PROMPT: &str = "Are you sure you want to reset ALL data? This cannot be undone!";

const DEFAULT_MESSAGE_DURATION_MS: u64 = 3000;

pub struct Game<S, P> {
    state: PlayerState,
    docs: DocumentStore<S>,
    presenter: P,
    clock: Box<dyn Clock>,
    message_duration_ms: u64,
}

impl<S: KeyValueStore, P: Presenter> Game<S, P> {
    /// Load the document and run the session start sequence.
    ///
    /// # Errors
    /// Returns an error if the session start changes cannot be saved.
    pub fn open(store: S, presenter: P) -> Result<Self> {
        Self::open_with_clock(store, presenter, SystemClock)
    }

    /// Like [`Game::open`] with an explicit clock.
    ///
    /// # Errors
    /// Returns an error if the session start changes cannot be saved.
    pub fn open_with_clock(store: S, presenter: P, clock: impl Clock + 'static) -> Result<Self> {
        let docs = DocumentStore::new(store);
        let state = docs.load();
        let mut game = Self {
            state,
            docs,
            presenter,
            clock: Box::new(clock),
            message_duration_ms: DEFAULT_MESSAGE_DURATION_MS,
        };
        let today = game.clock.today();
        let events = game.commit(|state| Ok(start_session(state, today)))?;
        // A saving commit has already refreshed the view.
        if events.is_empty() {
            game.presenter.refresh(&game.state);
        }
        Ok(game)
    }

    pub fn with_message_duration(mut self, duration_ms: u64) -> Self {
        self.message_duration_ms = duration_ms;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn store(&self) -> &S {
        self.docs.store()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// # Errors
    /// `ValidationError` for a blank title or unknown difficulty; storage
    /// errors if the save fails. The document is unchanged on error.
    pub fn create_quest(&mut self, title: &str, difficulty: &str) -> Result<Vec<Event>> {
        let difficulty: Difficulty = difficulty.parse()?;
        let now = self.clock.now();
        self.commit(|state| Ok(vec![state.create_quest(title, difficulty, now)?]))
    }

    /// # Errors
    /// Returns an error only if the save fails.
    pub fn complete_quest(&mut self, id: u64) -> Result<Vec<Event>> {
        self.commit(|state| Ok(state.complete_quest(id)))
    }

    /// Delete a quest after the presenter confirms.
    ///
    /// # Errors
    /// Returns an error only if the save fails.
    pub fn delete_quest(&mut self, id: u64) -> Result<Vec<Event>> {
        if self.state.quest(id).is_none() {
            tracing::debug!(id, "delete: no such quest");
            return Ok(Vec::new());
        }
        if !self.presenter.confirm(DELETE_PROMPT) {
            return Ok(Vec::new());
        }
        self.commit(|state| Ok(state.delete_quest(id).into_iter().collect()))
    }

    /// # Errors
    /// `ValidationError::EmptyUsername` for a blank name; storage errors if
    /// the save fails.
    pub fn rename(&mut self, username: &str) -> Result<Vec<Event>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        self.commit(|state| {
            state.username = username.to_string();
            Ok(vec![Event::ProfileRenamed {
                username: username.to_string(),
            }])
        })
    }

    /// Wipe all progress after the presenter confirms, then start a fresh
    /// session.
    ///
    /// # Errors
    /// Returns an error if the store cannot be cleared or written.
    pub fn reset(&mut self) -> Result<Vec<Event>> {
        if !self.presenter.confirm(RESET_PROMPT) {
            return Ok(Vec::new());
        }
        self.docs.clear()?;
        tracing::info!("player data reset");

        // The store is empty from here on, which loads as defaults, so a
        // failed save below still leaves memory and store in agreement.
        self.state = PlayerState::default();
        let today = self.clock.today();
        self.commit(|state| {
            let mut events = vec![Event::DataReset];
            events.extend(start_session(state, today));
            Ok(events)
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn commit<F>(&mut self, mutate: F) -> Result<Vec<Event>>
    where
        F: FnOnce(&mut PlayerState) -> Result<Vec<Event>>,
    {
        let snapshot = self.state.clone();
        let events = match mutate(&mut self.state) {
            Ok(events) => events,
            Err(e) => {
                self.state = snapshot;
                return Err(e);
            }
        };
        if !events.iter().any(Event::mutates_document) {
            return Ok(events);
        }
        if let Err(e) = self.docs.save(&self.state) {
            tracing::warn!(error = %e, "save failed, rolling back");
            self.state = snapshot;
            return Err(e);
        }
        present(&mut self.presenter, &events, self.message_duration_ms);
        self.presenter.refresh(&self.state);
        Ok(events)
    }
}

/// Count today's visit and pick up anything it unlocked.
fn start_session(state: &mut PlayerState, today: chrono::NaiveDate) -> Vec<Event> {
    let mut events: Vec<Event> = state.check_streak(today).into_iter().collect();
    events.extend(state.check_achievements());
    events
}
