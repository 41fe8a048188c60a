//! Work/break countdown.
//!
//! The timer engine is a tick-driven state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()` once
//! per elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Idle
//!   ^                |
//!   +-----reset------+
//! ```
//!
//! When a Running interval reaches zero the engine flips between Work and
//! Break, reloads the new interval and keeps running.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::default();
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::TimerCompleted) when an interval ends
//! ```

use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    pub fn other(self) -> Self {
        match self {
            TimerMode::Work => TimerMode::Break,
            TimerMode::Break => TimerMode::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Work => "Work Mode",
            TimerMode::Break => "Break Mode",
        }
    }
}

/// Canonical interval lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerDurations {
    pub work_secs: u32,
    pub break_secs: u32,
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

impl TimerDurations {
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: TimerDurations,
    state: TimerState,
    mode: TimerMode,
    remaining_secs: u32,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerDurations::default())
    }
}

impl TimerEngine {
    /// Idle, in Work mode, with a full work interval loaded.
    pub fn new(durations: TimerDurations) -> Self {
        Self {
            durations,
            state: TimerState::Idle,
            mode: TimerMode::Work,
            remaining_secs: durations.work_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn total_secs(&self) -> u32 {
        self.durations.for_mode(self.mode)
    }

    /// `MM:SS` for the remaining time.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    pub fn snapshot(&self) -> Event {
        Event::TimerSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Idle;
                Some(Event::TimerPaused {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                })
            }
            TimerState::Idle => None,
        }
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and reload the current mode's full interval.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.remaining_secs = self.total_secs();
        Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
        }
    }

    /// Advance one second. Returns `Some(Event::TimerCompleted)` when the
    /// interval runs out; the engine has already switched modes by then.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.mode;
        self.mode = finished.other();
        self.remaining_secs = self.total_secs();
        tracing::debug!(?finished, next = ?self.mode, "timer interval completed");
        Some(Event::TimerCompleted {
            finished,
            next: self.mode,
        })
    }
}
