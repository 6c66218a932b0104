mod columns;
mod types;

use std::path::Path;

pub use columns::check_required_columns;
pub use types::{check_numeric_columns, numeric_column};

use crate::error::PipelineError;
use crate::model::OptionsTable;
use crate::model::table::GAMMA_EXPOSURE;
use crate::{ingest, transform};

/// Validate a parsed table, collecting all errors.
///
/// Type checks only run once the schema is complete, so a missing column is
/// never reported twice.
pub fn validate(table: &OptionsTable) -> Result<(), Vec<PipelineError>> {
    if let Some(err) = check_required_columns(table) {
        return Err(vec![err]);
    }

    let errors = check_numeric_columns(table);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// CLI entry point for the `validate` subcommand.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let result = ingest::read_xlsx_file(path)
        .map_err(|e| vec![e])
        .and_then(|table| validate(&table).map(|()| table))
        .and_then(|table| transform::apply_exposure(&table).map_err(|e| vec![e]));

    match result {
        Ok(table) => {
            let peak = table
                .column(GAMMA_EXPOSURE)
                .into_iter()
                .flatten()
                .filter_map(|c| c.as_number())
                .fold(0.0_f64, f64::max);
            println!(
                "'{}' is valid. {} rows, {} columns, peak |Gamma| {peak}.",
                path.display(),
                table.row_count(),
                table.columns().len(),
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}
