//! Gamma exposure columns.

use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::model::table::{GAMMA, GAMMA_EXPOSURE, GAMMA_SCALED};
use crate::model::{Cell, OptionsTable};
use crate::validate::numeric_column;

/// Append `GammaExposure = |Gamma|` and `GammaScaled = GammaExposure / max`.
///
/// Existing columns with those names are overwritten. An empty table gets
/// two empty columns. A table whose gamma is zero on every row cannot be
/// normalized and is rejected.
pub fn apply_exposure(table: &OptionsTable) -> PipelineResult<OptionsTable> {
    let exposure: Vec<f64> = numeric_column(table, GAMMA)?
        .into_iter()
        .map(f64::abs)
        .collect();

    let peak = exposure.iter().copied().fold(0.0_f64, f64::max);
    if !exposure.is_empty() && peak <= 0.0 {
        return Err(PipelineError::Computation {
            message: format!(
                "every one of the {} Gamma values is zero, nothing to scale against",
                exposure.len()
            ),
        });
    }

    let scaled: Vec<Cell> = exposure.iter().map(|v| Cell::Number(v / peak)).collect();
    let exposure: Vec<Cell> = exposure.into_iter().map(Cell::Number).collect();

    let mut out = table.clone();
    out.set_column(GAMMA_EXPOSURE, exposure);
    out.set_column(GAMMA_SCALED, scaled);

    debug!(rows = out.row_count(), peak, "applied gamma exposure");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gamma_table(values: &[Cell]) -> OptionsTable {
        OptionsTable::from_rows(
            vec!["Gamma".into()],
            values.iter().cloned().map(|c| vec![c]).collect(),
        )
    }

    fn numbers(table: &OptionsTable, column: &str) -> Vec<f64> {
        table
            .column(column)
            .unwrap()
            .filter_map(Cell::as_number)
            .collect()
    }

    #[test]
    fn test_abs_and_scale() {
        let table = gamma_table(&[Cell::Number(-0.04), Cell::Number(0.02), Cell::Number(0.0)]);
        let out = apply_exposure(&table).unwrap();
        assert_eq!(numbers(&out, GAMMA_EXPOSURE), vec![0.04, 0.02, 0.0]);
        assert_eq!(numbers(&out, GAMMA_SCALED), vec![1.0, 0.5, 0.0]);
        assert_eq!(out.columns(), &["Gamma", "GammaExposure", "GammaScaled"]);
    }

    #[test]
    fn test_all_zero_is_rejected() {
        let table = gamma_table(&[Cell::Number(0.0), Cell::Number(-0.0)]);
        let err = apply_exposure(&table).unwrap_err();
        assert_eq!(err.kind(), "computation_error");
    }

    #[test]
    fn test_non_numeric_gamma_names_row() {
        let table = gamma_table(&[Cell::Number(0.1), Cell::Empty]);
        let err = apply_exposure(&table).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Type {
                column: "Gamma".into(),
                row: 2,
                value: "an empty cell".into(),
            }
        );
    }

    #[test]
    fn test_empty_table_gets_empty_columns() {
        let out = apply_exposure(&gamma_table(&[])).unwrap();
        assert!(out.is_empty());
        assert!(out.has_column(GAMMA_SCALED));
    }

    #[test]
    fn test_existing_derived_columns_are_replaced() {
        let table = OptionsTable::from_rows(
            vec!["Gamma".into(), "GammaScaled".into()],
            vec![vec![Cell::Number(2.0), Cell::from("stale")]],
        );
        let out = apply_exposure(&table).unwrap();
        assert_eq!(out.columns(), &["Gamma", "GammaScaled", "GammaExposure"]);
        assert_eq!(numbers(&out, GAMMA_SCALED), vec![1.0]);
    }
}
