use std::cmp::Ordering;

use serde::Serialize;

use super::cell::Cell;

/// Name of the required gamma column.
pub const GAMMA: &str = "Gamma";
/// Name of the required delta column.
pub const DELTA: &str = "Delta";
/// Name of the required vanna column.
pub const VANNA: &str = "Vanna";
/// Columns every upload must carry, in the order they are reported.
pub const REQUIRED_COLUMNS: [&str; 3] = [GAMMA, DELTA, VANNA];

/// Derived `|Gamma|` column.
pub const GAMMA_EXPOSURE: &str = "GammaExposure";
/// Derived max-normalized exposure column, used as bubble size.
pub const GAMMA_SCALED: &str = "GammaScaled";
/// Columns appended by the exposure transform.
pub const DERIVED_COLUMNS: [&str; 2] = [GAMMA_EXPOSURE, GAMMA_SCALED];

/// An uploaded options chain: named columns over row-major cells.
///
/// Every row holds exactly one cell per column. Rows are 0-based internally;
/// user-facing messages use 1-based data row numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OptionsTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl OptionsTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and rows, padding short rows with blanks
    /// and dropping cells beyond the header width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate one column top to bottom. `None` when the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Replace the named column, or append it when absent.
    ///
    /// `values` must hold one cell per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Copy of the table with rows ordered by a numeric column, largest
    /// first. The sort is stable and rows without a number go last.
    pub fn sorted_descending_by(&self, name: &str) -> Self {
        let Some(idx) = self.column_index(name) else {
            return self.clone();
        };
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| match (a[idx].as_number(), b[idx].as_number()) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionsTable {
        OptionsTable::from_rows(
            vec!["Strike".into(), "Gamma".into()],
            vec![
                vec![Cell::Number(100.0), Cell::Number(0.01)],
                vec![Cell::Number(105.0), Cell::from("n/a")],
                vec![Cell::Number(110.0), Cell::Number(0.05)],
            ],
        )
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = OptionsTable::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec![Cell::Number(1.0)]],
        );
        assert_eq!(table.rows()[0], vec![Cell::Number(1.0), Cell::Empty]);
    }

    #[test]
    fn test_set_column_appends_then_replaces() {
        let mut table = sample();
        table.set_column("Tag", vec![Cell::from("a"), Cell::from("b"), Cell::from("c")]);
        assert_eq!(table.columns().last().map(String::as_str), Some("Tag"));

        table.set_column("Tag", vec![Cell::Empty, Cell::Empty, Cell::Empty]);
        assert_eq!(table.columns().len(), 3);
        assert!(table.column("Tag").unwrap().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_sorted_descending_puts_non_numeric_last() {
        let sorted = sample().sorted_descending_by("Gamma");
        let strikes: Vec<f64> = sorted
            .column("Strike")
            .unwrap()
            .filter_map(Cell::as_number)
            .collect();
        assert_eq!(strikes, vec![110.0, 100.0, 105.0]);
    }

    #[test]
    fn test_missing_column_lookup() {
        let table = sample();
        assert!(table.column("Vanna").is_none());
        assert!(!table.has_column("Vanna"));
        assert_eq!(table.column_index("Gamma"), Some(1));
    }
}
