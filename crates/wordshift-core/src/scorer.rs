use std::collections::BTreeSet;
use std::sync::Arc;

use wordshift_config::score::ScoreConfig;
use wordshift_types::{
    Dimension, FilterRange, Method, SentimentReport, SentimentResult, WordCounts,
};

use crate::distribution::KernelDensity;
use crate::lexicon::{Lexicon, LexiconStore};
use crate::preprocess::{Tokenizer, WhitespaceTokenizer};

/// Per-method scoring switches
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreOptions {
    /// Neutral range on the method's primary dimension
    pub filter: Option<FilterRange>,
    pub include_counts: bool,
    pub include_distribution: bool,
}

impl ScoreOptions {
    pub fn from_config(config: &ScoreConfig, method: Method) -> Self {
        Self {
            filter: config.filter_for(method),
            include_counts: config.include_word_counts,
            include_distribution: config.include_distribution,
        }
    }
}

/// Scores text against the lexicons of a shared store
pub struct SentimentScorer {
    store: Arc<LexiconStore>,
    tokenizer: Box<dyn Tokenizer>,
}

impl SentimentScorer {
    pub fn new(store: Arc<LexiconStore>) -> Self {
        Self {
            store,
            tokenizer: Box::new(WhitespaceTokenizer),
        }
    }

    pub fn store(&self) -> &Arc<LexiconStore> {
        &self.store
    }

    /// Score `text` with every method of `config`.
    ///
    /// Methods without a loaded lexicon are skipped.
    pub fn compute(&self, text: &str, config: &ScoreConfig) -> SentimentReport {
        let tokens = self.tokenizer.tokenize(text);
        let mut report = SentimentReport::new();

        for &method in &config.methods {
            let options = ScoreOptions::from_config(config, method);
            report.extend(self.score_tokens(&tokens, method, &options));
        }

        report
    }

    /// Score `text` on every dimension of `method`
    pub fn score(&self, text: &str, method: Method, options: &ScoreOptions) -> SentimentReport {
        let tokens = self.tokenizer.tokenize(text);
        self.score_tokens(&tokens, method, options)
    }

    /// Score `text` on the requested dimensions only.
    ///
    /// Each lexicon involved is scored once with `options`, so a filter
    /// applies to the primary dimension of every method in the set.
    pub fn score_dimensions(
        &self,
        text: &str,
        dimensions: &BTreeSet<Dimension>,
        options: &ScoreOptions,
    ) -> SentimentReport {
        let tokens = self.tokenizer.tokenize(text);
        let methods: BTreeSet<Method> = dimensions.iter().map(|d| d.method()).collect();

        let mut report = SentimentReport::new();
        for method in methods {
            report.extend(self.score_tokens(&tokens, method, options));
        }
        report.retain(|dimension, _| dimensions.contains(dimension));
        report
    }

    fn score_tokens(
        &self,
        tokens: &[String],
        method: Method,
        options: &ScoreOptions,
    ) -> SentimentReport {
        let Some(lexicon) = self.store.lookup(method) else {
            tracing::warn!("No {} lexicon loaded, skipping", method);
            return SentimentReport::new();
        };

        let counts = count_words(lexicon, tokens, options.filter);
        let total: u64 = counts.values().sum();
        tracing::debug!(
            %method,
            tokens = tokens.len(),
            matched = total,
            distinct = counts.len(),
            "Scored text"
        );
        if total == 0 {
            tracing::debug!("No {} words counted, aggregates are zero", method);
        }

        method
            .dimensions()
            .iter()
            .map(|&dimension| {
                let result = aggregate(lexicon, dimension, &counts, total, options);
                (dimension, result)
            })
            .collect()
    }
}

/// Occurrences of eligible lexicon words among `tokens`
fn count_words(lexicon: &Lexicon, tokens: &[String], filter: Option<FilterRange>) -> WordCounts {
    let primary = lexicon.method().primary_dimension();
    let mut counts = WordCounts::new();

    for token in tokens {
        let Some(entry) = lexicon.get(token) else {
            continue;
        };
        if let Some(range) = filter {
            if entry.mean(primary).is_some_and(|mean| range.is_neutral(mean)) {
                continue;
            }
        }
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    counts
}

fn aggregate(
    lexicon: &Lexicon,
    dimension: Dimension,
    counts: &WordCounts,
    total: u64,
    options: &ScoreOptions,
) -> SentimentResult {
    let mut result = SentimentResult::empty(dimension);
    result.total = total;
    let mut density = options.include_distribution.then(KernelDensity::new);

    let total = total as f64;
    for (word, &count) in counts {
        let Some(stats) = lexicon.stats(word, dimension) else {
            continue;
        };
        let weight = count as f64 / total;
        result.mean += weight * stats.mean;
        result.variance += weight * stats.variance();
        if let Some(density) = density.as_mut() {
            density.add(stats, weight);
        }
    }

    result.distribution = density.map(KernelDensity::into_bins);

    if options.include_counts {
        result.word_probability = Some(
            counts
                .iter()
                .map(|(word, &count)| (word.clone(), count as f64 / total))
                .collect(),
        );
        result.word_counts = Some(counts.clone());
    }

    result
}
