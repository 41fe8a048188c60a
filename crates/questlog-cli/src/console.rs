//! Terminal presenter and text rendering.
//!
//! Everything the presenter emits (banners, bells, prompts, the summary
//! line) goes to stderr so command output on stdout stays machine readable.

use std::io::{BufRead, IsTerminal, Write};

use questlog_core::presenter::{Cue, Presenter};
use questlog_core::{threshold, Achievement, Config, PlayerState, Quest, MAX_LEVEL};

const BAR_WIDTH: usize = 20;

pub struct ConsolePresenter {
    sounds: bool,
    assume_yes: bool,
}

impl ConsolePresenter {
    pub fn new(config: &Config, assume_yes: bool) -> Self {
        Self {
            sounds: config.notifications.sounds,
            assume_yes,
        }
    }
}

impl Presenter for ConsolePresenter {
    fn refresh(&mut self, state: &PlayerState) {
        eprintln!("{}", summary_line(state));
    }

    fn play_cue(&mut self, cue: Cue) {
        tracing::debug!(cue = cue.name(), "cue");
        // Clicks stay silent in a terminal.
        if self.sounds && cue != Cue::Click {
            eprint!("\x07");
            let _ = std::io::stderr().flush();
        }
    }

    fn show_message(&mut self, text: &str, _duration_ms: u64) {
        eprintln!("{text}");
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            eprintln!("{prompt} (pass --yes to confirm non-interactively)");
            return false;
        }
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

pub fn summary_line(state: &PlayerState) -> String {
    format!(
        "{} · Lv {} · Rank {} · {} / {} XP · {}🔥",
        state.username,
        state.level,
        state.rank,
        state.xp,
        threshold(state.level),
        state.streak
    )
}

pub fn xp_bar(state: &PlayerState) -> String {
    let filled = (state.level_progress() * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub fn player_card(state: &PlayerState) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", state.username));
    out.push_str(&format!("  Level   {}  (Rank {})\n", state.level, state.rank));
    if state.level >= MAX_LEVEL {
        out.push_str(&format!("  XP      {} (max level)\n", state.xp));
    } else {
        out.push_str(&format!(
            "  XP      {} {} / {}  ({} to go)\n",
            xp_bar(state),
            state.xp,
            threshold(state.level),
            state.xp_to_next_level()
        ));
    }
    out.push_str(&format!("  Streak  {}🔥\n", state.streak));
    out.push_str(&format!("  Quests  {} completed\n", state.completed_count));
    out.push_str(&format!(
        "  Badges  {}/{}\n",
        state
            .achievement_board()
            .iter()
            .filter(|(_, unlocked)| *unlocked)
            .count(),
        questlog_core::CATALOG.len()
    ));
    out
}

pub fn quest_line(quest: &Quest) -> String {
    format!(
        "[{}] {}  {:<6}  +{} XP  {}",
        if quest.completed { "✓" } else { " " },
        quest.id,
        quest.difficulty,
        quest.xp_reward,
        quest.title
    )
}

pub fn achievement_line(achievement: &Achievement, unlocked: bool) -> String {
    format!(
        "{} {} {}",
        if unlocked { "■" } else { "□" },
        achievement.icon,
        achievement.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_core::Difficulty;

    #[test]
    fn xp_bar_fills_proportionally() {
        let state = PlayerState {
            xp: 50,
            ..PlayerState::default()
        };
        assert_eq!(xp_bar(&state), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn summary_mentions_level_and_rank() {
        let line = summary_line(&PlayerState::default());
        assert!(line.contains("Lv 1"));
        assert!(line.contains("Rank E"));
        assert!(line.contains("0 / 100 XP"));
    }

    #[test]
    fn quest_line_marks_completion() {
        let quest = Quest {
            id: 1,
            title: "Clean desk".into(),
            difficulty: Difficulty::Hard,
            xp_reward: 50,
            completed: true,
            created_at: chrono::Utc::now(),
        };
        let line = quest_line(&quest);
        assert!(line.starts_with("[✓] 1"));
        assert!(line.contains("+50 XP"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        let mut presenter = ConsolePresenter::new(&Config::default(), true);
        assert!(presenter.confirm("Delete?"));
    }
}
