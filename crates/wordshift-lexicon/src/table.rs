use crate::loader::LoadError;

/// Whitespace-delimited table with a header row
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    /// 1-based source line and its fields
    rows: Vec<(usize, Vec<String>)>,
}

impl Table {
    /// Parse table text. Blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self, LoadError> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(LoadError::Empty)?;
        let headers: Vec<String> = header.split_whitespace().map(str::to_string).collect();

        let rows = lines
            .map(|(number, line)| {
                let fields = line.split_whitespace().map(str::to_string).collect();
                (number, fields)
            })
            .collect();

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows.iter().map(|(n, fields)| (*n, fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching one of `names`
    pub fn column(&self, names: &[&str]) -> Result<usize, LoadError> {
        names
            .iter()
            .find_map(|name| self.headers.iter().position(|h| h == name))
            .ok_or_else(|| LoadError::MissingColumn(names.join(" | ")))
    }
}
