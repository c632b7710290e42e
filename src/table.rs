use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::error::{MapfolioError, MapfolioResult};

/// Column-oriented table read from a comma-delimited text file with a
/// header line. Values are kept as raw strings; typed access goes through
/// the column accessors.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>, // parallel to headers
    rows: usize,
}

impl Table {
    pub fn load(path: impl AsRef<Path>) -> MapfolioResult<Table> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening table {}", path.display()))?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(rows = table.len(), path = %path.display(), "loaded table");
        Ok(table)
    }

    pub fn from_reader(reader: impl BufRead) -> MapfolioResult<Table> {
        let mut lines = reader.lines();
        let header_line = match lines.next() {
            Some(line) => line.context("reading table header")?,
            None => {
                return Err(MapfolioError::data("empty table, expected a header line"));
            }
        };
        let headers: Vec<String> = split_line(&header_line).map(str::to_owned).collect();
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut rows = 0usize;

        for (index, line) in lines.enumerate() {
            let line = line.with_context(|| format!("reading table row {}", index + 1))?;
            let fields: Vec<&str> = split_line(&line).collect();
            if fields.len() != headers.len() {
                return Err(MapfolioError::data(format!(
                    "row {} has {} fields, expected {}",
                    index + 1,
                    fields.len(),
                    headers.len()
                )));
            }
            for (column, field) in columns.iter_mut().zip(&fields) {
                column.push((*field).to_owned());
            }
            rows += 1;
        }

        Ok(Table {
            headers,
            columns,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, name: &str) -> MapfolioResult<&[String]> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| MapfolioError::data(format!("table has no column '{name}'")))?;
        Ok(&self.columns[index])
    }

    pub fn column_f64(&self, name: &str) -> MapfolioResult<Vec<f64>> {
        self.column(name)?
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.parse::<f64>().map_err(|_| {
                    MapfolioError::data(format!(
                        "column '{name}' row {}: invalid number '{value}'",
                        index + 1
                    ))
                })
            })
            .collect()
    }
}

// Trailing '\r' is stripped so CRLF files parse the same as LF files.
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end_matches('\r').split(',')
}
