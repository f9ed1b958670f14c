pub mod dimension;
pub mod sentiment;
pub mod shift;

pub use dimension::{Dimension, DimensionStats, FilterRange, Method};
pub use sentiment::{DistributionBin, SentimentReport, SentimentResult, WordCounts, WordProbabilities};
pub use shift::{FrequencyDirection, ShiftCase, ValueDirection, WordShiftEntry, WordShiftReport};
