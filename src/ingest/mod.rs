//! Spreadsheet ingestion: `.xlsx` bytes to [`OptionsTable`].
//!
//! Only the first worksheet is read and its first non-empty row is taken as
//! the header. Header names are made unique the way pandas does it
//! (`Unnamed: 3` for blanks, `Strike.1` for repeats) so every column stays
//! addressable by name.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::Timelike;
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::model::{Cell, OptionsTable};

/// Parse an uploaded workbook.
pub fn read_xlsx(bytes: &[u8]) -> PipelineResult<OptionsTable> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(PipelineError::parse)?;

    let sheet_name = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PipelineError::parse("workbook contains no worksheet"))?
        .map_err(PipelineError::parse)?;

    // The range begins at the first non-empty cell, not at A1.
    let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        debug!(sheet = ?sheet_name, "worksheet has no cells");
        return Ok(OptionsTable::default());
    };

    let mut table = OptionsTable::new(header_names(header, first_col));
    for row in rows {
        let cells: Vec<Cell> = row.iter().map(to_cell).collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }

    debug!(
        sheet = ?sheet_name,
        columns = table.columns().len(),
        rows = table.row_count(),
        "parsed worksheet"
    );
    Ok(table)
}

/// Read and parse a workbook from disk.
pub fn read_xlsx_file(path: &Path) -> PipelineResult<OptionsTable> {
    let bytes = std::fs::read(path)
        .map_err(|e| PipelineError::parse(format!("reading {}: {e}", path.display())))?;
    read_xlsx(&bytes)
}

/// Turn the header row into unique column names. `first_col` is the sheet
/// column of `header[0]`, so blank headers are numbered by sheet column.
fn header_names(header: &[Data], first_col: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (i, cell) in header.iter().enumerate() {
        let base = match cell {
            Data::Empty => format!("Unnamed: {}", first_col + i),
            Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", first_col + i),
            other => to_cell(other).to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while !seen.insert(name.clone()) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }

    names
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_datetime() {
            Some(dt) if dt.num_seconds_from_midnight() == 0 => {
                Cell::Text(dt.format("%Y-%m-%d").to_string())
            }
            Some(dt) => Cell::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Cell::Text(data.to_string()),
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
        Data::Empty => Cell::Empty,
    }
}
