use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use wordshift_config::score::ScoreConfig;
use wordshift_types::{Dimension, SentimentResult, ShiftCase, WordShiftEntry, WordShiftReport};

use crate::error::ShiftError;
use crate::lexicon::LexiconStore;
use crate::scorer::SentimentScorer;

/// Attributes the difference between two scored texts to their words
pub struct WordShiftAnalyzer {
    store: Arc<LexiconStore>,
}

impl WordShiftAnalyzer {
    pub fn new(store: Arc<LexiconStore>) -> Self {
        Self { store }
    }

    /// Word shift of `comparison` against `reference` on `dimension`.
    ///
    /// Both results must be scored with word counts. Value differences are
    /// anchored to the reference mean, so swapping the inputs does not just
    /// negate the shifts. Fails with [`ShiftError::UndefinedShift`] when the
    /// two means are equal.
    ///
    /// A degenerate side (no counted words) enters with its zero mean as if
    /// it were a real score. Against a degenerate reference every value
    /// difference is the raw word rating; with a degenerate comparison the
    /// shifts sum to zero instead of ±100. Check
    /// [`SentimentResult::is_degenerate`] before reading such a report.
    pub fn compute_shift(
        &self,
        comparison: &SentimentResult,
        reference: &SentimentResult,
        dimension: Dimension,
    ) -> Result<WordShiftReport, ShiftError> {
        for result in [comparison, reference] {
            if result.dimension != dimension {
                return Err(ShiftError::DimensionMismatch {
                    expected: dimension,
                    found: result.dimension,
                });
            }
        }

        let (Some(comparison_probability), Some(reference_probability)) = (
            comparison.word_probability.as_ref(),
            reference.word_probability.as_ref(),
        ) else {
            return Err(ShiftError::MissingWordCounts { dimension });
        };

        let lexicon = self
            .store
            .lexicon_for(dimension)
            .ok_or(ShiftError::MissingLexicon {
                method: dimension.method(),
            })?;

        let difference = comparison.mean - reference.mean;
        if difference == 0.0 {
            tracing::warn!("Equal {} means ({}), word shift undefined", dimension, reference.mean);
            return Err(ShiftError::UndefinedShift {
                dimension,
                mean: reference.mean,
            });
        }

        let words: BTreeSet<&String> = comparison_probability
            .keys()
            .chain(reference_probability.keys())
            .collect();

        let mut word_shift = BTreeMap::new();
        for word in words {
            let mean = lexicon
                .mean(word, dimension)
                .ok_or_else(|| ShiftError::WordNotInLexicon {
                    word: word.clone(),
                    dimension,
                })?;

            let value_difference = mean - reference.mean;
            let frequency_difference = comparison_probability.get(word).copied().unwrap_or(0.0)
                - reference_probability.get(word).copied().unwrap_or(0.0);

            word_shift.insert(
                word.clone(),
                WordShiftEntry {
                    shift: 100.0 * value_difference * frequency_difference / difference.abs(),
                    case: ShiftCase::classify(value_difference, frequency_difference),
                    value_difference,
                    frequency_difference,
                },
            );
        }

        tracing::debug!(
            %dimension,
            difference,
            words = word_shift.len(),
            "Computed word shift"
        );

        Ok(WordShiftReport {
            dimension,
            difference,
            reference: reference.mean,
            comparison: comparison.mean,
            word_shift,
        })
    }
}

/// Scores two texts and computes word shifts on every configured dimension
pub struct WordShifts {
    scorer: SentimentScorer,
    analyzer: WordShiftAnalyzer,
    config: ScoreConfig,
}

impl WordShifts {
    /// Fails when a configured method has no lexicon in `store`
    pub fn new(store: Arc<LexiconStore>, config: ScoreConfig) -> Result<Self, ShiftError> {
        if let Some(&method) = config.methods.iter().find(|m| !store.contains(**m)) {
            return Err(ShiftError::MissingLexicon { method });
        }

        Ok(Self {
            scorer: SentimentScorer::new(Arc::clone(&store)),
            analyzer: WordShiftAnalyzer::new(store),
            config: config.with_word_counts(true),
        })
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// One outcome per dimension; an undefined dimension does not fail the rest
    pub fn compute_word_shifts(
        &self,
        comparison: &str,
        reference: &str,
    ) -> BTreeMap<Dimension, Result<WordShiftReport, ShiftError>> {
        let comparison = self.scorer.compute(comparison, &self.config);
        let reference = self.scorer.compute(reference, &self.config);

        comparison
            .iter()
            .filter_map(|(&dimension, comparison_result)| {
                let reference_result = reference.get(&dimension)?;
                let outcome =
                    self.analyzer
                        .compute_shift(comparison_result, reference_result, dimension);
                Some((dimension, outcome))
            })
            .collect()
    }
}
