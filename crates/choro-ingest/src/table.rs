//! Plain in-memory CSV tables.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// A fully materialized delimited table. Rows are padded or truncated to
/// the header width on read.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Case-insensitive position of a header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell at `(row, column)`, empty string when the row is short.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a headered CSV file; the first row supplies the column names.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers = raw_rows.remove(0);
    let rows = raw_rows
        .into_iter()
        .map(|record| {
            (0..headers.len())
                .map(|idx| record.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(CsvTable { headers, rows })
}

/// Reads a headerless positional CSV file, skipping blank lines. Short rows
/// are kept as-is; the caller decides the required arity.
pub fn read_positional_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn reads_headers_and_pads_short_rows() {
        let file = write_temp("country,value\nFrance,5\nGermany\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["country", "value"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Germany".to_string(), String::new()]);
    }

    #[test]
    fn strips_bom_and_blank_lines() {
        let file = write_temp("\u{feff}country,value\n\nFrance,5\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers[0], "country");
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn column_index_is_case_insensitive() {
        let file = write_temp("Country,VALUE\nFrance,5\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.column_index("country"), Some(0));
        assert_eq!(table.column_index("value"), Some(1));
        assert_eq!(table.column_index("iso"), None);
    }

    #[test]
    fn positional_rows_have_no_header() {
        let file = write_temp("France,250,\"29,901\"\nMonaco,492,1.7\n");
        let rows = read_positional_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], "29,901");
    }
}
