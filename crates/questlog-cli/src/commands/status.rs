use crate::console::player_card;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let game = super::open_game(false)?;
    if json {
        println!("{}", serde_json::to_string_pretty(game.state())?);
    } else {
        print!("{}", player_card(game.state()));
    }
    Ok(())
}
