use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Occurrences of each counted word, nonzero only
pub type WordCounts = BTreeMap<String, u64>;

/// Share of each counted word in the matched total
pub type WordProbabilities = BTreeMap<String, f64>;

/// Scoring output of one text, keyed by dimension
pub type SentimentReport = BTreeMap<Dimension, SentimentResult>;

/// One point of the kernel-smoothed affect distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionBin {
    pub value: f64,
    pub density: f64,
}

/// Frequency-weighted aggregate of one text on one dimension.
///
/// `variance` pools the per-word rating variances linearly by frequency
/// weight. It carries no between-word term, so it is not the variance of
/// the word mixture. A text without any counted word yields zero for every
/// aggregate and `total == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub dimension: Dimension,
    pub mean: f64,
    pub variance: f64,
    /// Number of tokens that matched an eligible lexicon word
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<DistributionBin>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_counts: Option<WordCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_probability: Option<WordProbabilities>,
}

impl SentimentResult {
    /// Zero-valued result for a text with no counted words
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            mean: 0.0,
            variance: 0.0,
            total: 0,
            distribution: None,
            word_counts: None,
            word_probability: None,
        }
    }

    /// Square root of the pooled variance
    pub fn std(&self) -> f64 {
        self.variance.sqrt()
    }

    /// True when no word of the text was counted
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }
}
