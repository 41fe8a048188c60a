//! Quest records and the ledger commands that create, complete and delete them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::state::PlayerState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// XP granted on completion. Copied into the quest when it is created.
    pub fn xp_reward(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ValidationError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: u64,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(alias = "xp")]
    pub xp_reward: u32,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl PlayerState {
    pub fn quest(&self, id: u64) -> Option<&Quest> {
        self.tasks.iter().find(|q| q.id == id)
    }

    /// Append a new open quest.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyTitle` if the trimmed title is empty.
    /// The document is untouched on error.
    pub fn create_quest(
        &mut self,
        title: &str,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Result<Event, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let id = self.next_quest_id(now);
        self.last_quest_id = id;
        let quest = Quest {
            id,
            title: title.to_string(),
            difficulty,
            xp_reward: difficulty.xp_reward(),
            completed: false,
            created_at: now,
        };
        let event = Event::QuestCreated {
            id: quest.id,
            title: quest.title.clone(),
            difficulty,
            xp_reward: quest.xp_reward,
        };
        self.tasks.push(quest);
        Ok(event)
    }

    /// Complete an open quest and award its XP.
    ///
    /// Unknown ids and already-completed quests are ignored and yield no
    /// events, so repeated triggers are harmless.
    pub fn complete_quest(&mut self, id: u64) -> Vec<Event> {
        let Some(quest) = self.tasks.iter_mut().find(|q| q.id == id) else {
            tracing::debug!(id, "complete: no such quest");
            return Vec::new();
        };
        if quest.completed {
            tracing::debug!(id, "complete: quest already completed");
            return Vec::new();
        }

        quest.completed = true;
        let reward = quest.xp_reward;
        let title = quest.title.clone();
        let is_hard = quest.difficulty == Difficulty::Hard;

        self.completed_count += 1;
        if is_hard {
            self.hard_quests_completed += 1;
        }

        let mut events = Vec::new();
        events.extend(self.add_experience(reward));
        events.extend(self.check_achievements());
        events.push(Event::QuestCompleted {
            id,
            title,
            xp_awarded: reward,
        });
        events
    }

    /// Remove a quest, completed or not. Historical counters are kept.
    pub fn delete_quest(&mut self, id: u64) -> Option<Event> {
        let before = self.tasks.len();
        self.tasks.retain(|q| q.id != id);
        if self.tasks.len() == before {
            tracing::debug!(id, "delete: no such quest");
            return None;
        }
        Some(Event::QuestDeleted { id })
    }

    /// Open quests first, then completed ones, each in insertion order.
    pub fn display_order(&self) -> Vec<&Quest> {
        let (done, open): (Vec<&Quest>, Vec<&Quest>) =
            self.tasks.iter().partition(|q| q.completed);
        open.into_iter().chain(done).collect()
    }

    /// Millisecond creation timestamp, bumped past every id issued so far.
    ///
    /// Live ids are checked too, since documents from the browser build carry
    /// no `lastQuestId`.
    fn next_quest_id(&self, now: DateTime<Utc>) -> u64 {
        let candidate = now.timestamp_millis().max(0) as u64;
        let newest = self
            .tasks
            .iter()
            .map(|q| q.id)
            .chain(std::iter::once(self.last_quest_id))
            .max()
            .unwrap_or(0);
        if newest >= candidate {
            newest + 1
        } else {
            candidate
        }
    }
}
