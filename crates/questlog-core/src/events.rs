use serde::{Deserialize, Serialize};

use crate::progression::Rank;
use crate::quest::Difficulty;
use crate::timer::{TimerMode, TimerState};

/// Every state change in the system produces an Event.
/// Commands return them in the order they happened; the presenter turns
/// them into cues and messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    QuestCreated {
        id: u64,
        title: String,
        difficulty: Difficulty,
        xp_reward: u32,
    },
    QuestCompleted {
        id: u64,
        title: String,
        xp_awarded: u32,
    },
    QuestDeleted {
        id: u64,
    },
    LevelUp {
        level: u32,
        rank: Rank,
        /// True when this level-up crossed a rank boundary.
        rank_changed: bool,
    },
    AchievementUnlocked {
        id: String,
        name: String,
        icon: String,
    },
    StreakUpdated {
        streak: u32,
        /// False when the streak was reset rather than extended.
        extended: bool,
    },
    ProfileRenamed {
        username: String,
    },
    DataReset,
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_secs: u32,
    },
    TimerReset {
        mode: TimerMode,
        remaining_secs: u32,
    },
    /// An interval ran out; the timer has already switched to `next`.
    TimerCompleted {
        finished: TimerMode,
        next: TimerMode,
    },
    TimerSnapshot {
        state: TimerState,
        mode: TimerMode,
        remaining_secs: u32,
        total_secs: u32,
    },
}

impl Event {
    /// True for events that change the persisted document.
    pub fn mutates_document(&self) -> bool {
        !matches!(
            self,
            Event::TimerStarted { .. }
                | Event::TimerPaused { .. }
                | Event::TimerReset { .. }
                | Event::TimerCompleted { .. }
                | Event::TimerSnapshot { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = Event::QuestCompleted {
            id: 7,
            title: "Clean desk".into(),
            xp_awarded: 50,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "QuestCompleted");
        assert_eq!(json["xp_awarded"], 50);
    }

    #[test]
    fn unit_variant_round_trips() {
        let json = serde_json::to_string(&Event::DataReset).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Event::DataReset);
    }

    #[test]
    fn timer_events_do_not_touch_the_document() {
        let tick = Event::TimerCompleted {
            finished: TimerMode::Work,
            next: TimerMode::Break,
        };
        assert!(!tick.mutates_document());
        assert!(Event::QuestDeleted { id: 1 }.mutates_document());
    }
}
