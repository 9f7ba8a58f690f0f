//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub console: ConsoleConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DemoConfig {
    /// Pause between the second and third scripted exchange
    pub pause_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "patter-bot".to_string(),
            },
            console: ConsoleConfig {
                prompt: "> ".to_string(),
            },
            demo: DemoConfig { pause_seconds: 2.2 },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(name) = std::env::var("PATTER_BOT_NAME") {
            config.bot.name = name;
        }

        config
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.demo.pause_seconds.is_finite() || self.demo.pause_seconds < 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "demo.pause-seconds must be a non-negative number, got {}",
                self.demo.pause_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bot.name, "patter-bot");
    }

    #[test]
    fn parses_kebab_case_yaml() {
        let yaml = "
bot:
  name: testbot
console:
  prompt: 'you> '
demo:
  pause-seconds: 0.5
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bot.name, "testbot");
        assert_eq!(config.console.prompt, "you> ");
        assert_eq!(config.demo.pause_seconds, 0.5);
    }

    #[test]
    fn rejects_negative_pause() {
        let mut config = Config::default();
        config.demo.pause_seconds = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.demo.pause_seconds, 2.2);
    }
}
