mod engine;

pub use engine::{TimerDurations, TimerEngine, TimerMode, TimerState};
