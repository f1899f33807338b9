//! # Configuration
//!
//! Game settings loaded from a TOML file, with defaults for every value.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - default hunter name and mode, starting gold, fixed seed
//! - [`ShopConfig`] - shelf prices and the sell-back markdown
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! default_name = "Hunter"
//! default_mode = "normal"
//! starting_gold = 10
//! # seed = 1234
//!
//! [shop]
//! sell_markdown = 0.5
//!
//! [shop.prices]
//! water = 2
//! rope = 4
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     Config::create_default("config.toml")?;
//!     let config = Config::load("config.toml")?;
//!     println!("Starting gold: {}", config.game.starting_gold);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

use crate::game::session::Difficulty;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_name")]
    pub default_name: String,
    #[serde(default)]
    pub default_mode: Difficulty,
    /// Gold a new hunter starts with (halved in hard mode)
    #[serde(default = "default_starting_gold")]
    pub starting_gold: i32,
    /// Fixed RNG seed for replayable games. Random when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_name() -> String {
    "Hunter".to_string()
}

fn default_starting_gold() -> i32 {
    10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            default_mode: Difficulty::default(),
            starting_gold: default_starting_gold(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Fraction of the shelf price paid when buying an item back
    #[serde(default = "default_sell_markdown")]
    pub sell_markdown: f64,
    #[serde(default = "default_prices")]
    pub prices: BTreeMap<String, i32>,
}

fn default_sell_markdown() -> f64 {
    0.5
}

fn default_prices() -> BTreeMap<String, i32> {
    [
        ("water", 2),
        ("rope", 4),
        ("machete", 6),
        ("horse", 12),
        ("boat", 20),
        ("boot", 5),
        ("shovel", 8),
        ("sword", 10),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            sell_markdown: default_sell_markdown(),
            prices: default_prices(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`, falling back to Warn for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.parse::<log::LevelFilter>() {
            Ok(l) => l,
            Err(_) => {
                log::warn!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, or fall back to defaults when the file is missing or bad
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.shop.sell_markdown > 0.0 && self.shop.sell_markdown <= 1.0) {
            bail!(
                "shop.sell_markdown must be in (0, 1], got {}",
                self.shop.sell_markdown
            );
        }
        if let Some((item, price)) = self.shop.prices.iter().find(|(_, p)| **p <= 0) {
            bail!("shop price for {} must be positive, got {}", item, price);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_crossing_item() {
        let config = Config::default();
        for item in ["water", "rope", "machete", "horse", "boat", "boot", "shovel", "sword"] {
            assert!(
                config.shop.prices.contains_key(item),
                "missing default price for {}",
                item
            );
        }
        assert_eq!(config.game.starting_gold, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [game]
            starting_gold = 25
            default_mode = "samurai"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.starting_gold, 25);
        assert_eq!(config.game.default_mode, Difficulty::Samurai);
        assert_eq!(config.game.default_name, "Hunter");
        assert_eq!(config.shop.sell_markdown, 0.5);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn validate_rejects_bad_shop_values() {
        let mut config = Config::default();
        config.shop.sell_markdown = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shop.prices.insert("rope".into(), 0);
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("rope"), "{}", err);
    }

    #[test]
    fn level_filter_parses_and_falls_back() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "loud".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }
}
