pub mod distribution;
pub mod error;
pub mod lexicon;
pub mod preprocess;
pub mod scorer;
pub mod shift;

pub use error::{LexiconError, ShiftError};
pub use lexicon::{Lexicon, LexiconEntry, LexiconStore};
pub use scorer::{ScoreOptions, SentimentScorer};
pub use shift::{WordShiftAnalyzer, WordShifts};
