use std::fmt;

use serde::{Deserialize, Serialize};

/// Lexicon family used to score a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Hedonometer word list, one dimension
    Happiness,
    /// Affective Norms for English Words, three dimensions
    Anew,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Happiness, Method::Anew];

    /// Parse method from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happiness" => Some(Method::Happiness),
            "anew" => Some(Method::Anew),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Happiness => "happiness",
            Method::Anew => "anew",
        }
    }

    /// Dimensions rated by this lexicon, in column order
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            Method::Happiness => &[Dimension::Happiness],
            Method::Anew => &[Dimension::Valence, Dimension::Arousal, Dimension::Dominance],
        }
    }

    /// Dimension whose mean decides the neutral-word filter
    pub fn primary_dimension(&self) -> Dimension {
        self.dimensions()[0]
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Affect dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Happiness,
    Valence,   // pleasantness
    Arousal,   // activation intensity
    Dominance, // sense of control
}

impl Dimension {
    /// Parse dimension from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happiness" => Some(Dimension::Happiness),
            "valence" => Some(Dimension::Valence),
            "arousal" => Some(Dimension::Arousal),
            "dominance" => Some(Dimension::Dominance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Happiness => "happiness",
            Dimension::Valence => "valence",
            Dimension::Arousal => "arousal",
            Dimension::Dominance => "dominance",
        }
    }

    /// Lexicon that rates this dimension
    pub fn method(&self) -> Method {
        match self {
            Dimension::Happiness => Method::Happiness,
            Dimension::Valence | Dimension::Arousal | Dimension::Dominance => Method::Anew,
        }
    }

    /// Header of the mean column in lexicon tables
    pub fn mean_column(&self) -> &'static str {
        match self {
            Dimension::Happiness => "happiness_mean",
            Dimension::Valence => "valence_mean",
            Dimension::Arousal => "arousal_mean",
            Dimension::Dominance => "dominance_mean",
        }
    }

    /// Header of the standard deviation column in lexicon tables
    pub fn std_column(&self) -> &'static str {
        match self {
            Dimension::Happiness => "happiness_std",
            Dimension::Valence => "valence_std",
            Dimension::Arousal => "arousal_std",
            Dimension::Dominance => "dominance_std",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rating statistics of one word on one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionStats {
    pub mean: f64,
    pub std: f64,
}

impl DimensionStats {
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    pub fn variance(&self) -> f64 {
        self.std * self.std
    }
}

/// Open interval of affect values treated as neutral.
///
/// Words whose mean falls strictly inside `(low, high)` are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub low: f64,
    pub high: f64,
}

impl FilterRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_neutral(&self, value: f64) -> bool {
        self.low < value && value < self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anew_rates_three_dimensions() {
        assert_eq!(
            Method::Anew.dimensions(),
            &[Dimension::Valence, Dimension::Arousal, Dimension::Dominance]
        );
        assert_eq!(Method::Anew.primary_dimension(), Dimension::Valence);
        for dim in Method::Anew.dimensions() {
            assert_eq!(dim.method(), Method::Anew);
        }
    }

    #[test]
    fn filter_bounds_are_exclusive() {
        let range = FilterRange::new(4.0, 6.0);
        assert!(range.is_neutral(5.0));
        assert!(!range.is_neutral(4.0));
        assert!(!range.is_neutral(6.0));
        assert!(!range.is_neutral(8.2));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Method::parse("ANEW"), Some(Method::Anew));
        assert_eq!(Dimension::parse("Valence"), Some(Dimension::Valence));
        assert_eq!(Dimension::parse("joy"), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Dimension::Dominance).unwrap();
        assert_eq!(json, "\"dominance\"");
        let method: Method = serde_json::from_str("\"happiness\"").unwrap();
        assert_eq!(method, Method::Happiness);
    }
}
