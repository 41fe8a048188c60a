//! The player document.
//!
//! `PlayerState` is the single document the whole app revolves around. It is
//! stored as flat camelCase JSON. Every field has a default and the container
//! is `#[serde(default)]`, so a document saved by an older build is merged
//! over current defaults on load: fields it lacks simply take their default.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::progression::Rank;
use crate::quest::Quest;

pub const DEFAULT_USERNAME: &str = "Hunter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerState {
    pub username: String,
    pub level: u32,
    /// XP accumulated toward the next level.
    pub xp: u32,
    pub rank: Rank,
    /// Quests in insertion order.
    pub tasks: Vec<Quest>,
    /// Quests ever completed. Not decremented when quests are deleted.
    pub completed_count: u32,
    #[serde(alias = "lastVisit", with = "visit_date")]
    pub last_visit_date: Option<NaiveDate>,
    pub streak: u32,
    /// Unlocked achievement ids in unlock order.
    pub achievements: Vec<String>,
    pub hard_quests_completed: u32,
    /// Highest quest id ever issued, so ids of deleted quests are never reused.
    pub last_quest_id: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            level: 1,
            xp: 0,
            rank: Rank::E,
            tasks: Vec::new(),
            completed_count: 0,
            last_visit_date: None,
            streak: 0,
            achievements: Vec::new(),
            hard_quests_completed: 0,
            last_quest_id: 0,
        }
    }
}

impl PlayerState {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }
}

/// Visit dates are written as `YYYY-MM-DD`. Documents written by the
/// browser build used `Date.toDateString()` ("Mon Oct 19 2026"), which is
/// accepted on read. Anything unparseable reads as "never visited".
mod visit_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const ISO: &str = "%Y-%m-%d";
    const LEGACY: &str = "%a %b %d %Y";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_some(&d.format(ISO).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, ISO)
            .or_else(|_| NaiveDate::parse_from_str(raw, LEGACY))
            .ok()
    }
}
