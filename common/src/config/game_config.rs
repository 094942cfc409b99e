use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::games::tictactoe::GameMode;
use super::Validate;

pub const MAX_REPLY_DELAY_MS: u64 = 10_000;
const DEFAULT_REPLY_DELAY_MS: u64 = 500;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// How long the computer "thinks" before replying.
    pub reply_delay_ms: u64,
    pub starting_mode: GameMode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl GameConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            starting_mode: GameMode::HumanVsOpponent,
            seed: None,
            log_prefix: None,
            verbose: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(format!(
                "Reply delay must be at most {} ms, got {}",
                MAX_REPLY_DELAY_MS, self.reply_delay_ms
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
