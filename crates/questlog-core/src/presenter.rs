//! Outward-facing presentation seam.
//!
//! The engine never renders anything itself. It hands events to a
//! `Presenter`, and `present` maps each event to the cue and message the
//! user should see or hear.

use crate::events::Event;
use crate::state::PlayerState;
use crate::timer::TimerMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Complete,
    LevelUp,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::Complete => "complete",
            Cue::LevelUp => "levelup",
        }
    }
}

pub trait Presenter {
    /// Re-render from the current document.
    fn refresh(&mut self, state: &PlayerState);

    /// Fire a short audio cue. Best effort.
    fn play_cue(&mut self, cue: Cue);

    /// Show a short-lived banner.
    fn show_message(&mut self, text: &str, duration_ms: u64);

    /// Ask before a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Cue and banner text for an event, if any.
pub fn describe(event: &Event) -> (Option<Cue>, Option<String>) {
    match event {
        Event::QuestCreated { .. } => (Some(Cue::Click), Some("⚔️ QUEST CREATED".into())),
        Event::QuestCompleted { xp_awarded, .. } => (
            Some(Cue::Complete),
            Some(format!("⚔️ QUEST COMPLETED +{xp_awarded} XP")),
        ),
        Event::QuestDeleted { .. } | Event::DataReset => (Some(Cue::Click), None),
        Event::LevelUp {
            level,
            rank,
            rank_changed,
        } => {
            let text = if *rank_changed {
                format!("You've reached Rank {rank}! You're becoming stronger!")
            } else {
                format!("Congratulations! You've reached Level {level}!")
            };
            (Some(Cue::LevelUp), Some(text))
        }
        Event::AchievementUnlocked { name, .. } => {
            (None, Some(format!("🏆 ACHIEVEMENT UNLOCKED: {name}")))
        }
        Event::ProfileRenamed { .. } => (Some(Cue::Click), Some("⚙️ SETTINGS SAVED".into())),
        Event::TimerStarted { .. } | Event::TimerPaused { .. } | Event::TimerReset { .. } => {
            (Some(Cue::Click), None)
        }
        Event::TimerCompleted { finished, .. } => {
            let text = match finished {
                TimerMode::Work => "⏱️ WORK SESSION COMPLETE! Take a break.",
                TimerMode::Break => "⏱️ BREAK OVER! Ready for another session?",
            };
            (Some(Cue::Complete), Some(text.into()))
        }
        Event::StreakUpdated { .. } | Event::TimerSnapshot { .. } => (None, None),
    }
}

/// Play the cue and show the banner for each event, in order.
pub fn present<P: Presenter + ?Sized>(presenter: &mut P, events: &[Event], duration_ms: u64) {
    for event in events {
        let (cue, message) = describe(event);
        if let Some(cue) = cue {
            presenter.play_cue(cue);
        }
        if let Some(message) = message {
            presenter.show_message(&message, duration_ms);
        }
    }
}

/// Presenter that records every call. Useful for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub refreshes: usize,
    pub cues: Vec<Cue>,
    pub messages: Vec<String>,
    /// Display duration passed with each message.
    pub durations: Vec<u64>,
    pub prompts: Vec<String>,
    /// Answer given to every confirmation prompt.
    pub approve: bool,
}

impl RecordingPresenter {
    pub fn approving() -> Self {
        Self {
            approve: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl Presenter for RecordingPresenter {
    fn refresh(&mut self, _state: &PlayerState) {
        self.refreshes += 1;
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn show_message(&mut self, text: &str, duration_ms: u64) {
        self.messages.push(text.to_string());
        self.durations.push(duration_ms);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.approve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::Rank;

    #[test]
    fn level_up_text_depends_on_rank_change() {
        let plain = Event::LevelUp {
            level: 5,
            rank: Rank::E,
            rank_changed: false,
        };
        let promoted = Event::LevelUp {
            level: 11,
            rank: Rank::D,
            rank_changed: true,
        };
        assert_eq!(
            describe(&plain).1.as_deref(),
            Some("Congratulations! You've reached Level 5!")
        );
        assert_eq!(
            describe(&promoted).1.as_deref(),
            Some("You've reached Rank D! You're becoming stronger!")
        );
    }

    #[test]
    fn present_plays_cues_and_messages_in_order() {
        let mut presenter = RecordingPresenter::default();
        let events = vec![
            Event::AchievementUnlocked {
                id: "first_quest".into(),
                name: "First Quest".into(),
                icon: "⚔️".into(),
            },
            Event::QuestCompleted {
                id: 1,
                title: "Run".into(),
                xp_awarded: 10,
            },
        ];
        present(&mut presenter, &events, 3000);
        assert_eq!(presenter.cues, [Cue::Complete]);
        assert_eq!(
            presenter.messages,
            ["🏆 ACHIEVEMENT UNLOCKED: First Quest", "⚔️ QUEST COMPLETED +10 XP"]
        );
    }

    #[test]
    fn timer_completion_messages() {
        let work_done = Event::TimerCompleted {
            finished: TimerMode::Work,
            next: TimerMode::Break,
        };
        assert_eq!(
            describe(&work_done),
            (
                Some(Cue::Complete),
                Some("⏱️ WORK SESSION COMPLETE! Take a break.".to_string())
            )
        );
    }

    #[test]
    fn silent_events() {
        assert_eq!(
            describe(&Event::StreakUpdated {
                streak: 2,
                extended: true
            }),
            (None, None)
        );
    }
}
