//! Daily visit streaks.

use chrono::{Days, NaiveDate};

use crate::events::Event;
use crate::state::PlayerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakOutcome {
    /// Already counted today.
    Unchanged,
    /// Last visit was yesterday; holds the new streak.
    Extended(u32),
    /// First visit, a gap of two or more days, or a last visit dated in the
    /// future. The streak restarts at 1.
    Reset,
}

pub fn evaluate(today: NaiveDate, last: Option<NaiveDate>, streak: u32) -> StreakOutcome {
    let Some(last) = last else {
        return StreakOutcome::Reset;
    };
    if last == today {
        return StreakOutcome::Unchanged;
    }
    match today.checked_sub_days(Days::new(1)) {
        Some(yesterday) if last == yesterday => StreakOutcome::Extended(streak.saturating_add(1)),
        _ => StreakOutcome::Reset,
    }
}

impl PlayerState {
    /// Count today's visit. Call once per session start.
    pub fn check_streak(&mut self, today: NaiveDate) -> Option<Event> {
        let (streak, extended) = match evaluate(today, self.last_visit_date, self.streak) {
            StreakOutcome::Unchanged => return None,
            StreakOutcome::Extended(streak) => (streak, true),
            StreakOutcome::Reset => (1, false),
        };
        self.streak = streak;
        self.last_visit_date = Some(today);
        tracing::debug!(streak, extended, %today, "streak updated");
        Some(Event::StreakUpdated { streak, extended })
    }
}
