use crate::error::{PipelineError, PipelineResult};
use crate::model::OptionsTable;
use crate::model::table::{DELTA, VANNA};

/// Required columns whose type is checked up front. `Gamma` is checked by the
/// exposure transform, which needs its values anyway.
const CHECKED_COLUMNS: [&str; 2] = [DELTA, VANNA];

/// Coerce a whole column to numbers, failing on the first non-numeric cell.
pub fn numeric_column(table: &OptionsTable, column: &str) -> PipelineResult<Vec<f64>> {
    let cells = table.column(column).ok_or_else(|| PipelineError::Schema {
        missing: vec![column.to_string()],
    })?;

    cells
        .enumerate()
        .map(|(i, cell)| {
            cell.as_number().ok_or_else(|| PipelineError::Type {
                column: column.to_string(),
                row: i + 1,
                value: cell.describe(),
            })
        })
        .collect()
}

/// Check that `Delta` and `Vanna` hold only numbers.
///
/// Returns at most one error per column. Absent columns are skipped; they are
/// reported by the schema check.
pub fn check_numeric_columns(table: &OptionsTable) -> Vec<PipelineError> {
    CHECKED_COLUMNS
        .iter()
        .filter(|name| table.has_column(name))
        .filter_map(|name| numeric_column(table, name).err())
        .collect()
}
