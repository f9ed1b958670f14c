use wordshift_types::{Dimension, Method};

/// Invalid lexicon data, raised while a lexicon is built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    #[error("Invalid word {word:?} in {method} lexicon")]
    InvalidWord { word: String, method: Method },

    #[error("Word '{word}' has no {dimension} rating")]
    MissingDimension { word: String, dimension: Dimension },

    #[error("Word '{word}' has invalid {dimension} mean: {mean}")]
    InvalidMean {
        word: String,
        dimension: Dimension,
        mean: f64,
    },

    #[error("Word '{word}' has invalid {dimension} standard deviation: {std}")]
    InvalidStd {
        word: String,
        dimension: Dimension,
        std: f64,
    },
}

/// Word shift computation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShiftError {
    #[error("Undefined shift on {dimension}: comparison and reference means are both {mean}")]
    UndefinedShift { dimension: Dimension, mean: f64 },

    #[error("Result for {dimension} was scored without word counts")]
    MissingWordCounts { dimension: Dimension },

    #[error("Expected a {expected} result, got {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    #[error("Word '{word}' has no {dimension} rating in the lexicon store")]
    WordNotInLexicon { word: String, dimension: Dimension },

    #[error("No {method} lexicon loaded")]
    MissingLexicon { method: Method },
}
