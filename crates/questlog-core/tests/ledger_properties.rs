//! Property tests over random command sequences.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use questlog_core::{threshold, Difficulty, Event, PlayerState, MAX_LEVEL};

#[derive(Debug, Clone)]
enum Command {
    Create(Difficulty),
    Complete(usize),
    CompleteTwice(usize),
    Delete(usize),
}

fn command() -> impl Strategy<Value = Command> {
    let difficulty = prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard)
    ];
    prop_oneof![
        3 => difficulty.prop_map(Command::Create),
        3 => any::<usize>().prop_map(Command::Complete),
        1 => any::<usize>().prop_map(Command::CompleteTwice),
        1 => any::<usize>().prop_map(Command::Delete),
    ]
}

fn pick(state: &PlayerState, index: usize) -> Option<u64> {
    if state.tasks.is_empty() {
        None
    } else {
        Some(state.tasks[index % state.tasks.len()].id)
    }
}

proptest! {
    #[test]
    fn ledger_invariants_hold(commands in proptest::collection::vec(command(), 1..200)) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut state = PlayerState::default();
        let mut issued = HashSet::new();

        for cmd in commands {
            let before = state.clone();
            match cmd {
                Command::Create(difficulty) => {
                    let Event::QuestCreated { id, .. } =
                        state.create_quest("Quest", difficulty, now).unwrap()
                    else {
                        panic!("expected QuestCreated");
                    };
                    // Ids are never reused, even after deletes.
                    prop_assert!(issued.insert(id));
                }
                Command::Complete(i) => {
                    if let Some(id) = pick(&state, i) {
                        state.complete_quest(id);
                    }
                }
                Command::CompleteTwice(i) => {
                    if let Some(id) = pick(&state, i) {
                        state.complete_quest(id);
                        let once = state.clone();
                        prop_assert!(state.complete_quest(id).is_empty());
                        prop_assert_eq!(&state, &once);
                    }
                }
                Command::Delete(i) => {
                    if let Some(id) = pick(&state, i) {
                        state.delete_quest(id);
                    }
                }
            }

            prop_assert!(state.completed_count >= before.completed_count);
            prop_assert!(state.hard_quests_completed >= before.hard_quests_completed);
            prop_assert!(state.level >= before.level);
            prop_assert!(state.rank >= before.rank);
            prop_assert!(state.hard_quests_completed <= state.completed_count);
            for id in &before.achievements {
                prop_assert!(state.has_achievement(id));
            }
            if state.level < MAX_LEVEL {
                prop_assert!(state.xp < threshold(state.level));
            }
        }

        let live_completed = state.tasks.iter().filter(|q| q.completed).count() as u32;
        prop_assert!(live_completed <= state.completed_count);
    }
}
