mod content_provider;
mod game_config;
mod manager;
mod serializer;

pub use content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryContentProvider};
pub use game_config::{GameConfig, MAX_REPLY_DELAY_MS};
pub use manager::ConfigManager;
pub use serializer::{ConfigSerializer, YamlConfigSerializer};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
