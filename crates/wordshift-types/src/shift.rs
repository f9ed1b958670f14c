use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Word value relative to the reference mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDirection {
    /// Strictly above the reference mean
    Above,
    /// At or below the reference mean
    Below,
}

/// Word usage in the comparison text relative to the reference text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyDirection {
    Up,
    Down,
    Unchanged,
}

/// Direction tag of a word shift, rendered as `+u`, `-d`, `+0`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ShiftCase {
    pub value: ValueDirection,
    pub frequency: FrequencyDirection,
}

impl ShiftCase {
    pub fn classify(value_difference: f64, frequency_difference: f64) -> Self {
        let value = if value_difference > 0.0 {
            ValueDirection::Above
        } else {
            ValueDirection::Below
        };

        let frequency = match frequency_difference.partial_cmp(&0.0) {
            Some(Ordering::Greater) => FrequencyDirection::Up,
            Some(Ordering::Less) => FrequencyDirection::Down,
            _ => FrequencyDirection::Unchanged,
        };

        Self { value, frequency }
    }

    pub fn tag(&self) -> &'static str {
        match (self.value, self.frequency) {
            (ValueDirection::Above, FrequencyDirection::Up) => "+u",
            (ValueDirection::Above, FrequencyDirection::Down) => "+d",
            (ValueDirection::Above, FrequencyDirection::Unchanged) => "+0",
            (ValueDirection::Below, FrequencyDirection::Up) => "-u",
            (ValueDirection::Below, FrequencyDirection::Down) => "-d",
            (ValueDirection::Below, FrequencyDirection::Unchanged) => "-0",
        }
    }

    /// Parse a tag produced by [`ShiftCase::tag`]
    pub fn parse(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        let value = match chars.next()? {
            '+' => ValueDirection::Above,
            '-' => ValueDirection::Below,
            _ => return None,
        };
        let frequency = match chars.next()? {
            'u' => FrequencyDirection::Up,
            'd' => FrequencyDirection::Down,
            '0' => FrequencyDirection::Unchanged,
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self { value, frequency })
    }
}

impl fmt::Display for ShiftCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<ShiftCase> for String {
    fn from(case: ShiftCase) -> Self {
        case.tag().to_string()
    }
}

impl TryFrom<String> for ShiftCase {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        ShiftCase::parse(&tag).ok_or_else(|| format!("invalid shift case: {tag}"))
    }
}

/// Contribution of one word to the aggregate difference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordShiftEntry {
    /// Percentage of the absolute aggregate difference
    pub shift: f64,
    pub case: ShiftCase,
    /// Word value minus the reference mean
    pub value_difference: f64,
    /// Comparison probability minus reference probability
    pub frequency_difference: f64,
}

/// Word-by-word attribution of `comparison - reference` on one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordShiftReport {
    pub dimension: Dimension,
    pub difference: f64,
    pub reference: f64,
    pub comparison: f64,
    pub word_shift: BTreeMap<String, WordShiftEntry>,
}

impl WordShiftReport {
    /// Entries ordered by descending absolute shift, ties by word
    pub fn ranked(&self) -> Vec<(&str, &WordShiftEntry)> {
        let mut entries: Vec<(&str, &WordShiftEntry)> = self
            .word_shift
            .iter()
            .map(|(word, entry)| (word.as_str(), entry))
            .collect();

        entries.sort_by(|a, b| {
            b.1.shift
                .abs()
                .total_cmp(&a.1.shift.abs())
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    pub fn top(&self, n: usize) -> Vec<(&str, &WordShiftEntry)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Sum of all word shifts, about 100 when the words explain the difference
    pub fn total_shift(&self) -> f64 {
        self.word_shift.values().map(|e| e.shift).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(shift: f64) -> WordShiftEntry {
        WordShiftEntry {
            shift,
            case: ShiftCase::classify(shift, shift),
            value_difference: shift,
            frequency_difference: shift,
        }
    }

    #[test]
    fn classify_tags() {
        assert_eq!(ShiftCase::classify(1.5, 0.2).tag(), "+u");
        assert_eq!(ShiftCase::classify(1.5, -0.2).tag(), "+d");
        assert_eq!(ShiftCase::classify(-1.5, 0.2).tag(), "-u");
        assert_eq!(ShiftCase::classify(-1.5, -0.2).tag(), "-d");
    }

    #[test]
    fn zero_value_difference_is_below() {
        assert_eq!(ShiftCase::classify(0.0, -1.0).tag(), "-d");
    }

    #[test]
    fn zero_frequency_difference_is_unchanged() {
        let case = ShiftCase::classify(2.0, 0.0);
        assert_eq!(case.frequency, FrequencyDirection::Unchanged);
        assert_eq!(case.tag(), "+0");
    }

    #[test]
    fn case_serializes_as_tag() {
        let case = ShiftCase::classify(-3.0, 0.5);
        let json = serde_json::to_string(&case).unwrap();
        assert_eq!(json, "\"-u\"");
        let back: ShiftCase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, case);
        assert!(serde_json::from_str::<ShiftCase>("\"+x\"").is_err());
    }

    #[test]
    fn ranked_orders_by_magnitude() {
        let mut word_shift = BTreeMap::new();
        word_shift.insert("calm".to_string(), entry(10.0));
        word_shift.insert("war".to_string(), entry(-70.0));
        word_shift.insert("love".to_string(), entry(40.0));
        let report = WordShiftReport {
            dimension: Dimension::Happiness,
            difference: 1.0,
            reference: 5.0,
            comparison: 6.0,
            word_shift,
        };

        let words: Vec<&str> = report.ranked().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["war", "love", "calm"]);
        assert_eq!(report.top(1)[0].0, "war");
        assert!((report.total_shift() - -20.0).abs() < 1e-12);
    }
}
