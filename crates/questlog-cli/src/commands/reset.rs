pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = super::open_game(yes)?;
    let events = game.reset()?;
    if events.is_empty() {
        eprintln!("reset cancelled");
    } else {
        println!("all progress erased");
    }
    Ok(())
}
