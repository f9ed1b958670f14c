use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use wordshift_config::Config;
use wordshift_config::score::ScoreConfig;
use wordshift_core::{SentimentScorer, ShiftError, WordShifts};
use wordshift_lexicon::LexiconLoader;
use wordshift_types::{Dimension, WordShiftEntry, WordShiftReport};

/// One word of a ranked shift listing
#[derive(Debug, Serialize)]
pub struct RankedWord {
    pub word: String,
    #[serde(flatten)]
    pub entry: WordShiftEntry,
}

/// Shift outcome of one dimension as printed
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DimensionShift {
    Report {
        difference: f64,
        reference: f64,
        comparison: f64,
        words: Vec<RankedWord>,
    },
    Undefined {
        error: String,
    },
}

impl DimensionShift {
    pub fn from_outcome(outcome: Result<WordShiftReport, ShiftError>, top: Option<usize>) -> Self {
        match outcome {
            Ok(report) => {
                let ranked = match top {
                    Some(n) => report.top(n),
                    None => report.ranked(),
                };
                let words = ranked
                    .into_iter()
                    .map(|(word, entry)| RankedWord {
                        word: word.to_string(),
                        entry: *entry,
                    })
                    .collect();
                DimensionShift::Report {
                    difference: report.difference,
                    reference: report.reference,
                    comparison: report.comparison,
                    words,
                }
            }
            Err(e) => {
                tracing::warn!("{e}");
                DimensionShift::Undefined {
                    error: e.to_string(),
                }
            }
        }
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn score(
    config: &Config,
    score: &ScoreConfig,
    input: &Path,
) -> anyhow::Result<serde_json::Value> {
    let store = LexiconLoader::load_store(&config.lexicon)?;
    let scorer = SentimentScorer::new(Arc::new(store));
    let text = read_text(input)?;

    let report = scorer.compute(&text, score);
    Ok(serde_json::to_value(report)?)
}

pub fn shift(
    config: &Config,
    comparison: &Path,
    reference: &Path,
    top: Option<usize>,
) -> anyhow::Result<serde_json::Value> {
    let store = LexiconLoader::load_store(&config.lexicon)?;
    let shifts = WordShifts::new(Arc::new(store), config.score.clone())?;
    let comparison = read_text(comparison)?;
    let reference = read_text(reference)?;

    let output: BTreeMap<Dimension, DimensionShift> = shifts
        .compute_word_shifts(&comparison, &reference)
        .into_iter()
        .map(|(dimension, outcome)| (dimension, DimensionShift::from_outcome(outcome, top)))
        .collect();
    Ok(serde_json::to_value(output)?)
}
