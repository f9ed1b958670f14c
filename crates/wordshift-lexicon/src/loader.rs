use std::path::Path;

use wordshift_config::lexicon::LexiconConfig;
use wordshift_core::{Lexicon, LexiconEntry, LexiconError, LexiconStore};
use wordshift_types::{Dimension, DimensionStats, Method};

use crate::table::Table;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lexicon table is empty")]
    Empty,

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid number {value:?} in column {column}")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(#[from] LexiconError),

    #[error("No lexicon path configured")]
    NothingConfigured,
}

/// Column positions of one dimension's statistics
struct StatColumns {
    dimension: Dimension,
    mean: usize,
    std: usize,
}

pub struct LexiconLoader;

impl LexiconLoader {
    /// Parse a lexicon table.
    ///
    /// The first field of each row is the word. Statistics are found by
    /// header name (`happiness_mean`, `valence_std`, ...); a one-dimension
    /// table may also name them `mean` and `std`. Other columns are ignored.
    pub fn parse(method: Method, content: &str) -> Result<Lexicon, LoadError> {
        let table = Table::parse(content)?;
        let single = method.dimensions().len() == 1;

        let columns = method
            .dimensions()
            .iter()
            .map(|&dimension| -> Result<StatColumns, LoadError> {
                let (mean, std) = if single {
                    (
                        table.column(&[dimension.mean_column(), "mean"])?,
                        table.column(&[dimension.std_column(), "std"])?,
                    )
                } else {
                    (
                        table.column(&[dimension.mean_column()])?,
                        table.column(&[dimension.std_column()])?,
                    )
                };
                Ok(StatColumns {
                    dimension,
                    mean,
                    std,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected = columns
            .iter()
            .map(|c| c.mean.max(c.std) + 1)
            .max()
            .unwrap_or(1);

        let mut entries = Vec::with_capacity(table.len());
        for (line, fields) in table.rows() {
            if fields.len() < expected {
                return Err(LoadError::ShortRow {
                    line,
                    expected,
                    found: fields.len(),
                });
            }

            let mut entry = LexiconEntry::new();
            for c in &columns {
                let mean = parse_number(&table, line, fields, c.mean)?;
                let std = parse_number(&table, line, fields, c.std)?;
                entry.insert(c.dimension, DimensionStats::new(mean, std));
            }
            entries.push((fields[0].clone(), entry));
        }

        let lexicon = Lexicon::new(method, entries)?;
        Ok(lexicon)
    }

    /// Load a lexicon table from file
    pub fn load_from_file(method: Method, path: &Path) -> Result<Lexicon, LoadError> {
        tracing::info!("Loading {} lexicon from file: {}", method, path.display());
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(method, &content)?;
        tracing::info!("Loaded {} {} lexicon entries", lexicon.len(), method);
        Ok(lexicon)
    }

    /// Build a store from every configured lexicon path
    pub fn load_store(config: &LexiconConfig) -> Result<LexiconStore, LoadError> {
        let sources = [
            (Method::Happiness, config.happiness_path.as_deref()),
            (Method::Anew, config.anew_path.as_deref()),
        ];

        let mut store = LexiconStore::new();
        let mut loaded = 0;
        for (method, path) in sources {
            let Some(path) = path else {
                tracing::debug!("No {} lexicon configured", method);
                continue;
            };
            store = store.with_lexicon(Self::load_from_file(method, path)?);
            loaded += 1;
        }

        if loaded == 0 {
            return Err(LoadError::NothingConfigured);
        }
        Ok(store)
    }
}

fn parse_number(
    table: &Table,
    line: usize,
    fields: &[String],
    column: usize,
) -> Result<f64, LoadError> {
    let value = &fields[column];
    value.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        column: table.headers()[column].clone(),
        value: value.clone(),
    })
}
