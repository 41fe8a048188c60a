//! Achievement catalog and unlock scan.
//!
//! Each achievement is a tagged record with a plain predicate over the
//! player document. Unlocks are one-way.

use crate::events::Event;
use crate::progression::{Rank, MAX_LEVEL};
use crate::state::PlayerState;

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub condition: fn(&PlayerState) -> bool,
}

impl Achievement {
    pub fn is_met(&self, state: &PlayerState) -> bool {
        (self.condition)(state)
    }
}

/// All achievements, in display and unlock order.
pub static CATALOG: &[Achievement] = &[
    Achievement {
        id: "first_quest",
        name: "First Quest",
        icon: "⚔️",
        condition: |s| s.completed_count >= 1,
    },
    Achievement {
        id: "quest_10",
        name: "10 Quests",
        icon: "🎯",
        condition: |s| s.completed_count >= 10,
    },
    Achievement {
        id: "quest_50",
        name: "50 Quests",
        icon: "🏅",
        condition: |s| s.completed_count >= 50,
    },
    Achievement {
        id: "quest_100",
        name: "100 Quests",
        icon: "👑",
        condition: |s| s.completed_count >= 100,
    },
    Achievement {
        id: "first_levelup",
        name: "Level Up",
        icon: "⬆️",
        condition: |s| s.level >= 2,
    },
    Achievement {
        id: "level_10",
        name: "Level 10",
        icon: "⭐",
        condition: |s| s.level >= 10,
    },
    Achievement {
        id: "level_25",
        name: "Level 25",
        icon: "💫",
        condition: |s| s.level >= 25,
    },
    Achievement {
        id: "level_50",
        name: "Level 50",
        icon: "✨",
        condition: |s| s.level >= 50,
    },
    Achievement {
        id: "level_100",
        name: "Max Level",
        icon: "🌟",
        condition: |s| s.level >= MAX_LEVEL,
    },
    Achievement {
        id: "streak_7",
        name: "7 Day Streak",
        icon: "🔥",
        condition: |s| s.streak >= 7,
    },
    Achievement {
        id: "streak_30",
        name: "30 Day Streak",
        icon: "🔥🔥",
        condition: |s| s.streak >= 30,
    },
    Achievement {
        id: "hard_5",
        name: "Hard Quests",
        icon: "💪",
        condition: |s| s.hard_quests_completed >= 5,
    },
    Achievement {
        id: "s_rank",
        name: "S-Rank Hunter",
        icon: "🏆",
        condition: |s| s.rank == Rank::S,
    },
];

pub fn find(id: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.id == id)
}

impl PlayerState {
    /// Unlock every catalog entry whose condition now holds.
    ///
    /// Returns one event per new unlock, in catalog order.
    pub fn check_achievements(&mut self) -> Vec<Event> {
        let newly: Vec<&'static Achievement> = CATALOG
            .iter()
            .filter(|a| !self.has_achievement(a.id) && a.is_met(self))
            .collect();

        newly
            .into_iter()
            .map(|a| {
                tracing::info!(id = a.id, "achievement unlocked");
                self.achievements.push(a.id.to_string());
                Event::AchievementUnlocked {
                    id: a.id.to_string(),
                    name: a.name.to_string(),
                    icon: a.icon.to_string(),
                }
            })
            .collect()
    }

    /// Catalog entries paired with their unlock status.
    pub fn achievement_board(&self) -> Vec<(&'static Achievement, bool)> {
        CATALOG
            .iter()
            .map(|a| (a, self.has_achievement(a.id)))
            .collect()
    }
}
