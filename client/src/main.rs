mod cli;
mod config;
mod input;
mod renderer;
mod runner;

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::{ChannelBroadcaster, TicTacToeSession, TicTacToeSessionState};
use common::{log, logger};
use tokio::io::BufReader;

use cli::Args;
use config::get_config_manager;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.apply_to(config_manager.get_config()?);
    config.validate()?;

    logger::init_logger(config.log_prefix.clone(), config.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let session_state = TicTacToeSessionState::from_config("local", &config);
    log!(
        "Starting {} with seed {}, reply delay {} ms",
        config.starting_mode.label(),
        session_state.rng.lock().await.seed(),
        config.reply_delay_ms
    );

    let (broadcaster, events) = ChannelBroadcaster::new();
    let session = TicTacToeSession::new(session_state, broadcaster);

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    runner::run_game(session, events, input, &mut output).await?;

    log!("Bye");
    Ok(())
}
