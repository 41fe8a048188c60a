use crate::console::achievement_line;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let game = super::open_game(false)?;
    let board = game.state().achievement_board();

    if json {
        let entries: Vec<serde_json::Value> = board
            .iter()
            .map(|(achievement, unlocked)| {
                serde_json::json!({
                    "id": achievement.id,
                    "name": achievement.name,
                    "icon": achievement.icon,
                    "unlocked": unlocked,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let unlocked = board.iter().filter(|(_, unlocked)| *unlocked).count();
    println!("Achievements {unlocked}/{}", board.len());
    for (achievement, unlocked) in board {
        println!("{}", achievement_line(achievement, unlocked));
    }
    Ok(())
}
