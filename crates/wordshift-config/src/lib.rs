use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::lexicon::LexiconConfig;
use self::score::ScoreConfig;

pub mod lexicon;
pub mod score;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub score: ScoreConfig,
    pub lexicon: LexiconConfig,
}

impl Config {
    /// Defaults overridden by `WORDSHIFT_*` environment variables
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Override fields with environment variables when set
    pub fn apply_env(&mut self) {
        if let Some(min) = env::var("WORDSHIFT_HAPPINESS_MIN")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.score.happiness_min = min;
        }

        if let Some(max) = env::var("WORDSHIFT_HAPPINESS_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.score.happiness_max = max;
        }

        if let Ok(path) = env::var("WORDSHIFT_HAPPINESS_LEXICON") {
            self.lexicon.happiness_path = Some(path.into());
        }

        if let Ok(path) = env::var("WORDSHIFT_ANEW_LEXICON") {
            self.lexicon.anew_path = Some(path.into());
        }
    }
}
