//! XP, levels and ranks.
//!
//! Leveling consumes the old level's threshold and carries the remainder
//! forward. A single `add_experience` call levels up at most once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::state::PlayerState;

pub const MAX_LEVEL: u32 = 100;

/// Rank tiers, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    #[default]
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Minimum level for each rank, highest first.
const RANK_FLOORS: [(u32, Rank); 5] = [
    (86, Rank::S),
    (66, Rank::A),
    (46, Rank::B),
    (26, Rank::C),
    (11, Rank::D),
];

pub fn rank_for_level(level: u32) -> Rank {
    RANK_FLOORS
        .iter()
        .find(|(floor, _)| level >= *floor)
        .map(|(_, rank)| *rank)
        .unwrap_or(Rank::E)
}

/// XP needed to clear `level`.
pub fn threshold(level: u32) -> u32 {
    100 + level.saturating_sub(1) * 20
}

impl PlayerState {
    /// Add XP, leveling up once if the current threshold is reached.
    pub fn add_experience(&mut self, amount: u32) -> Option<Event> {
        if amount == 0 {
            return None;
        }
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= threshold(self.level) {
            self.level_up()
        } else {
            None
        }
    }

    /// Spend the current threshold and advance one level.
    ///
    /// At `MAX_LEVEL` this does nothing and surplus XP stays banked.
    pub fn level_up(&mut self) -> Option<Event> {
        if self.level >= MAX_LEVEL {
            return None;
        }
        let needed = threshold(self.level);
        if self.xp < needed {
            return None;
        }
        self.xp -= needed;
        self.level += 1;

        let new_rank = rank_for_level(self.level);
        let rank_changed = new_rank != self.rank;
        self.rank = new_rank;

        tracing::info!(level = self.level, rank = %self.rank, rank_changed, "level up");
        Some(Event::LevelUp {
            level: self.level,
            rank: self.rank,
            rank_changed,
        })
    }

    pub fn xp_to_next_level(&self) -> u32 {
        threshold(self.level).saturating_sub(self.xp)
    }

    /// 0.0 ..= 1.0 progress through the current level.
    pub fn level_progress(&self) -> f64 {
        (self.xp as f64 / threshold(self.level) as f64).min(1.0)
    }
}
