//! Term Breakout entry point
//!
//! Sets up logging and the terminal, runs the game loop, and prints the
//! result once the terminal has been restored.

use anyhow::Result;

use term_breakout::sim::GameState;
use term_breakout::terminal::{self, Terminal};
use term_breakout::{Exit, announce, run};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Term Breakout starting...");
    terminal::install_panic_hook();

    let mut state = GameState::new();
    let exit = {
        let mut term = Terminal::enter()?;
        run(&mut state, &mut term)?
    };

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Final state: {}", serde_json::to_string(&state)?);
    }

    match exit {
        Exit::Finished(result) => {
            log::info!("Game over: {:?}", result);
            announce(result);
        }
        Exit::Quit => log::info!("Quit"),
    }
    Ok(())
}
