use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the lexicon tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub happiness_path: Option<PathBuf>,
    pub anew_path: Option<PathBuf>,
}
