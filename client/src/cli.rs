use clap::{Parser, ValueEnum};
use common::config::GameConfig;
use common::games::tictactoe::GameMode;

const LOG_PREFIX: &str = "TicTacToe";

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
pub struct Args {
    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub reply_delay_ms: Option<u64>,

    #[arg(long)]
    pub verbose: bool,

    #[arg(long)]
    pub use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans share the keyboard.
    Hvh,
    /// Human plays X against the computer.
    Hvo,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hvh => GameMode::HumanVsHuman,
            ModeArg::Hvo => GameMode::HumanVsOpponent,
        }
    }
}

impl Args {
    /// Command line values win over the config file.
    pub fn apply_to(&self, config: GameConfig) -> GameConfig {
        let log_prefix = match config.log_prefix {
            None if self.use_log_prefix => Some(LOG_PREFIX.to_string()),
            prefix => prefix,
        };

        GameConfig {
            reply_delay_ms: self.reply_delay_ms.unwrap_or(config.reply_delay_ms),
            starting_mode: self.mode.map(GameMode::from).unwrap_or(config.starting_mode),
            seed: self.seed.or(config.seed),
            log_prefix,
            verbose: self.verbose || config.verbose,
        }
    }
}
