use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use trek_tactical::cli;
use trek_tactical::io::terminal::{spawn_input_poller, Terminal};
use trek_tactical::services::game::Game;
use trek_tactical::{GameConfig, GameEngine, GameState};

/// The terminal is in raw mode while playing, so log records go to a file
/// or nowhere.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::parse();
    init_logging(args.log_file.as_deref())?;

    let config = GameConfig::from(args);
    let engine = GameEngine::new(&config).context("could not set up the galaxy")?;

    let outcome = {
        let terminal = Terminal::begin().context("could not open the terminal")?;
        let input = spawn_input_poller().context("could not start the input thread")?;
        let mut game = Game::new(engine, terminal, input, config.tick);
        // The terminal is restored when `game` drops, before any error is
        // reported.
        game.run()
    };

    match outcome {
        Ok(GameState::Quit) => log::info!("player quit"),
        Ok(state) => log::info!("game over: {:?}", state),
        Err(e) => {
            log::error!("fatal: {}", e);
            return Err(e).context("the game stopped unexpectedly");
        }
    }
    Ok(())
}
