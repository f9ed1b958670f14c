use serde::{Deserialize, Serialize};
use wordshift_types::{FilterRange, Method};

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

fn default_happiness_min() -> f64 {
    4.0
}

fn default_happiness_max() -> f64 {
    6.0
}

/// Scoring settings, immutable once a scoring session starts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,
    #[serde(default = "default_happiness_min")]
    pub happiness_min: f64,
    #[serde(default = "default_happiness_max")]
    pub happiness_max: f64,
    /// Neutral range on valence, unfiltered when absent
    pub anew_filter: Option<FilterRange>,
    pub include_word_counts: bool,
    pub include_distribution: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            happiness_min: default_happiness_min(),
            happiness_max: default_happiness_max(),
            anew_filter: None,
            include_word_counts: false,
            include_distribution: false,
        }
    }
}

impl ScoreConfig {
    /// Neutral-word filter applied when scoring with `method`
    pub fn filter_for(&self, method: Method) -> Option<FilterRange> {
        match method {
            Method::Happiness => Some(FilterRange::new(self.happiness_min, self.happiness_max)),
            Method::Anew => self.anew_filter,
        }
    }

    pub fn with_methods(mut self, methods: &[Method]) -> Self {
        self.methods = methods.to_vec();
        self
    }

    pub fn with_word_counts(mut self, include: bool) -> Self {
        self.include_word_counts = include;
        self
    }

    pub fn with_distribution(mut self, include: bool) -> Self {
        self.include_distribution = include;
        self
    }
}
