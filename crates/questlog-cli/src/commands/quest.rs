//! Quest ledger commands.

use clap::Subcommand;
use questlog_core::Event;

use crate::console::quest_line;

#[derive(Subcommand)]
pub enum QuestAction {
    /// Add a new quest
    Add {
        /// Quest title
        title: String,
        /// Difficulty: easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: String,
    },
    /// List quests, open ones first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Complete a quest and collect its XP
    Complete {
        /// Quest ID
        id: u64,
    },
    /// Delete a quest
    Delete {
        /// Quest ID
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(action: QuestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuestAction::Add { title, difficulty } => {
            let mut game = super::open_game(false)?;
            let events = game.create_quest(&title, &difficulty)?;
            for event in &events {
                if let Event::QuestCreated { id, .. } = event {
                    println!("Quest created: {id}");
                }
            }
        }
        QuestAction::List { json } => {
            let game = super::open_game(false)?;
            let quests = game.state().display_order();
            if json {
                println!("{}", serde_json::to_string_pretty(&quests)?);
            } else if quests.is_empty() {
                println!("No quests yet. Add one with `questlog quest add <title>`.");
            } else {
                for quest in quests {
                    println!("{}", quest_line(quest));
                }
            }
        }
        QuestAction::Complete { id } => {
            let mut game = super::open_game(false)?;
            let events = game.complete_quest(id)?;
            if events.is_empty() {
                eprintln!("quest {id} is unknown or already completed");
            } else {
                println!("Quest completed: {id}");
            }
        }
        QuestAction::Delete { id, yes } => {
            let mut game = super::open_game(yes)?;
            if game.state().quest(id).is_none() {
                eprintln!("no quest with id {id}");
                return Ok(());
            }
            let events = game.delete_quest(id)?;
            if events.is_empty() {
                eprintln!("delete cancelled");
            } else {
                println!("Quest deleted: {id}");
            }
        }
    }
    Ok(())
}
