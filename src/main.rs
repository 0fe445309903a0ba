use std::io;

use freefall_calculator::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut app = App::new(console);
    app.run()?;

    Ok(())
}
