//! Invariants of scoring and word shifts over generated lexicons and texts.

use std::sync::Arc;

use proptest::prelude::*;
use wordshift_core::{
    Lexicon, LexiconEntry, LexiconStore, ScoreOptions, SentimentScorer, WordShiftAnalyzer,
};
use wordshift_types::{Dimension, Method, SentimentResult};

const VOCABULARY: [&str; 8] = ["joy", "grief", "calm", "rage", "home", "storm", "gift", "loss"];

// -----------------------------------------------------------------------------
// Strategies
// -----------------------------------------------------------------------------

/// Mean and std for every vocabulary word
fn ratings_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((1.0f64..9.0, 0.3f64..3.0), VOCABULARY.len())
}

/// Texts mixing vocabulary words (any case) with unknown words
fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec((0usize..12, any::<bool>()), 0..40).prop_map(|picks| {
        picks
            .into_iter()
            .map(|(i, upper)| {
                let word = VOCABULARY.get(i).copied().unwrap_or("zzz");
                if upper { word.to_uppercase() } else { word.to_string() }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn store(ratings: &[(f64, f64)]) -> Arc<LexiconStore> {
    let lexicon = Lexicon::new(
        Method::Happiness,
        VOCABULARY.iter().zip(ratings).map(|(word, &(mean, std))| {
            (
                word.to_string(),
                LexiconEntry::new().with(Dimension::Happiness, mean, std),
            )
        }),
    )
    .unwrap();
    Arc::new(LexiconStore::new().with_lexicon(lexicon))
}

fn score(scorer: &SentimentScorer, text: &str) -> SentimentResult {
    let options = ScoreOptions {
        include_counts: true,
        include_distribution: false,
        filter: None,
    };
    scorer
        .score(text, Method::Happiness, &options)
        .remove(&Dimension::Happiness)
        .unwrap()
}

// -----------------------------------------------------------------------------
// Scoring
// -----------------------------------------------------------------------------

proptest! {
    /// Mean stays within the ratings of the matched words
    #[test]
    fn mean_in_convex_hull(ratings in ratings_strategy(), text in text_strategy()) {
        let store = store(&ratings);
        let scorer = SentimentScorer::new(Arc::clone(&store));
        let result = score(&scorer, &text);
        let counts = result.word_counts.clone().unwrap();
        prop_assume!(!counts.is_empty());

        let lexicon = store.lookup(Method::Happiness).unwrap();
        let means: Vec<f64> = counts
            .keys()
            .map(|w| lexicon.mean(w, Dimension::Happiness).unwrap())
            .collect();
        let low = means.iter().copied().fold(f64::INFINITY, f64::min);
        let high = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(result.mean >= low - 1e-9, "{} < {}", result.mean, low);
        prop_assert!(result.mean <= high + 1e-9, "{} > {}", result.mean, high);
    }

    /// Word probabilities form a distribution whenever a word was counted
    #[test]
    fn probabilities_sum_to_one(ratings in ratings_strategy(), text in text_strategy()) {
        let scorer = SentimentScorer::new(store(&ratings));
        let result = score(&scorer, &text);
        let counts = result.word_counts.clone().unwrap();
        let probability = result.word_probability.clone().unwrap();

        prop_assert_eq!(
            counts.keys().collect::<Vec<_>>(),
            probability.keys().collect::<Vec<_>>()
        );
        prop_assert!(counts.values().all(|&c| c > 0));

        if result.is_degenerate() {
            prop_assert!(probability.is_empty());
            prop_assert_eq!(result.mean, 0.0);
        } else {
            let sum: f64 = probability.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        }
    }

    /// Same text and options give the same result
    #[test]
    fn scoring_is_deterministic(ratings in ratings_strategy(), text in text_strategy()) {
        let scorer = SentimentScorer::new(store(&ratings));
        let options = ScoreOptions {
            include_counts: true,
            include_distribution: true,
            filter: None,
        };
        let first = scorer.score(&text, Method::Happiness, &options);
        let second = scorer.score(&text, Method::Happiness, &options);
        prop_assert_eq!(first, second);
    }

    /// Word shifts add up to the full difference, signed by its direction
    #[test]
    fn shifts_sum_to_hundred(
        ratings in ratings_strategy(),
        comparison in text_strategy(),
        reference in text_strategy(),
    ) {
        let store = store(&ratings);
        let scorer = SentimentScorer::new(Arc::clone(&store));
        let analyzer = WordShiftAnalyzer::new(store);
        let comparison = score(&scorer, &comparison);
        let reference = score(&scorer, &reference);
        prop_assume!(!comparison.is_degenerate() && !reference.is_degenerate());
        prop_assume!((comparison.mean - reference.mean).abs() > 1e-6);

        let report = analyzer
            .compute_shift(&comparison, &reference, Dimension::Happiness)
            .unwrap();
        let expected = 100.0 * report.difference.signum();
        prop_assert!((report.total_shift() - expected).abs() < 1e-6, "total = {}", report.total_shift());
    }
}

#[test]
fn unknown_vocabulary_is_degenerate() {
    let scorer = SentimentScorer::new(store(&[(5.0, 1.0); 8]));
    let result = score(&scorer, "nothing here matches");
    assert_eq!(result.mean, 0.0);
    assert!(result.word_counts.unwrap().is_empty());
}

#[test]
fn scorer_is_shared_across_threads() {
    let scorer = SentimentScorer::new(store(&[(7.0, 1.0); 8]));
    let texts = ["joy calm", "rage storm loss", "gift"];

    let scorer = &scorer;
    let means: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|&text| scope.spawn(move || score(scorer, text).mean))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(means.iter().all(|m| (m - 7.0).abs() < 1e-12));
}
