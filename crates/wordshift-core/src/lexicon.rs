use std::collections::{BTreeMap, HashMap};

use wordshift_types::{Dimension, DimensionStats, Method};

use crate::error::LexiconError;

/// Ratings of one word, per dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconEntry {
    stats: BTreeMap<Dimension, DimensionStats>,
}

impl LexiconEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: Dimension, mean: f64, std: f64) -> Self {
        self.insert(dimension, DimensionStats::new(mean, std));
        self
    }

    pub fn insert(&mut self, dimension: Dimension, stats: DimensionStats) {
        self.stats.insert(dimension, stats);
    }

    pub fn get(&self, dimension: Dimension) -> Option<DimensionStats> {
        self.stats.get(&dimension).copied()
    }

    pub fn mean(&self, dimension: Dimension) -> Option<f64> {
        self.get(dimension).map(|s| s.mean)
    }
}

/// Word ratings of a single method, validated on construction
#[derive(Debug, Clone)]
pub struct Lexicon {
    method: Method,
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Build a lexicon, case-folding words.
    ///
    /// Every entry must carry a finite mean and a finite, strictly positive
    /// standard deviation for each dimension of `method`. Later duplicates
    /// of a folded word replace earlier ones.
    pub fn new<I>(method: Method, entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (String, LexiconEntry)>,
    {
        let mut map = HashMap::new();

        for (word, entry) in entries {
            let word = word.to_lowercase();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(LexiconError::InvalidWord { word, method });
            }

            for &dimension in method.dimensions() {
                let Some(stats) = entry.get(dimension) else {
                    return Err(LexiconError::MissingDimension { word, dimension });
                };
                if !stats.mean.is_finite() {
                    return Err(LexiconError::InvalidMean {
                        word,
                        dimension,
                        mean: stats.mean,
                    });
                }
                if !stats.std.is_finite() || stats.std <= 0.0 {
                    return Err(LexiconError::InvalidStd {
                        word,
                        dimension,
                        std: stats.std,
                    });
                }
            }

            if map.insert(word.clone(), entry).is_some() {
                tracing::debug!("Duplicate {} entry '{}' replaced", method, word);
            }
        }

        Ok(Self {
            method,
            entries: map,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn stats(&self, word: &str, dimension: Dimension) -> Option<DimensionStats> {
        self.get(word).and_then(|e| e.get(dimension))
    }

    pub fn mean(&self, word: &str, dimension: Dimension) -> Option<f64> {
        self.stats(word, dimension).map(|s| s.mean)
    }

    /// Full word to ratings mapping
    pub fn entries(&self) -> &HashMap<String, LexiconEntry> {
        &self.entries
    }
}

/// Read-only collection of loaded lexicons, one per method
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    lexicons: BTreeMap<Method, Lexicon>,
}

impl LexiconStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lexicon, replacing any previous one of the same method
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        tracing::info!("Registered {} lexicon with {} words", lexicon.method, lexicon.len());
        self.lexicons.insert(lexicon.method, lexicon);
        self
    }

    pub fn lookup(&self, method: Method) -> Option<&Lexicon> {
        self.lexicons.get(&method)
    }

    /// Lexicon rating `dimension`
    pub fn lexicon_for(&self, dimension: Dimension) -> Option<&Lexicon> {
        self.lookup(dimension.method())
    }

    pub fn contains(&self, method: Method) -> bool {
        self.lexicons.contains_key(&method)
    }

    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.lexicons.keys().copied()
    }
}
