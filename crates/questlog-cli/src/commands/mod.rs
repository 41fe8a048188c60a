pub mod achievements;
pub mod config;
pub mod profile;
pub mod quest;
pub mod reset;
pub mod status;
pub mod timer;

use questlog_core::{Config, Database, Game};

use crate::console::ConsolePresenter;

pub type Session = Game<Database, ConsolePresenter>;

/// Open the on-disk document and run the session start sequence.
///
/// `assume_yes` answers every confirmation prompt with yes.
pub fn open_game(assume_yes: bool) -> Result<Session, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let presenter = ConsolePresenter::new(&config, assume_yes);
    let game = Game::open(Database::open()?, presenter)?
        .with_message_duration(config.notifications.message_duration_ms);
    Ok(game)
}
