//! # Questlog Core Library
//!
//! This library provides the core logic for Questlog, a gamified task
//! tracker: quests earn XP, XP earns levels and ranks, daily visits build
//! streaks, milestones unlock achievements, and a work/break timer runs on
//! the side. The `questlog` CLI is a thin terminal layer over this crate.
//!
//! ## Architecture
//!
//! - **Player document**: one [`PlayerState`] value holding all progress,
//!   persisted as JSON under a single key in a [`KeyValueStore`]
//! - **Engine**: progression, quest ledger, streak and achievement rules
//!   implemented as methods on [`PlayerState`]; each returns [`Event`]s
//! - **Session facade**: [`Game`] runs commands with write-through
//!   persistence and hands events to a [`Presenter`]
//! - **Timer**: a tick-driven work/break state machine, independent of the
//!   player document
//!
//! ## Key Components
//!
//! - [`Game`]: Session facade
//! - [`TimerEngine`]: Work/break countdown
//! - [`Database`]: SQLite key-value store
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod clock;
pub mod error;
pub mod events;
pub mod game;
pub mod presenter;
pub mod progression;
pub mod quest;
pub mod state;
pub mod storage;
pub mod streak;
pub mod timer;

pub use achievements::{Achievement, CATALOG};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use game::Game;
pub use presenter::{Cue, Presenter, RecordingPresenter};
pub use progression::{rank_for_level, threshold, Rank, MAX_LEVEL};
pub use quest::{Difficulty, Quest};
pub use state::PlayerState;
pub use storage::{Config, Database, DocumentStore, KeyValueStore, MemoryStore};
pub use streak::StreakOutcome;
pub use timer::{TimerDurations, TimerEngine, TimerMode, TimerState};
