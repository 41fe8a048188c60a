use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Change the player name
    Rename {
        /// New name
        name: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Rename { name } => {
            let mut game = super::open_game(false)?;
            game.rename(&name)?;
            println!("{}", game.state().username);
        }
    }
    Ok(())
}
