use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// A decoded export: the header row plus raw string cells, untouched apart
/// from CSV unquoting.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[cfg(test)]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        // cells decode lossily so one bad byte only spoils its own cell
        let mut rows = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            let row: Vec<String> = record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect();
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn column(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == label)
    }

    pub fn cell<'a>(row: &'a [String], column: usize) -> Option<&'a str> {
        row.get(column).map(String::as_str)
    }
}
