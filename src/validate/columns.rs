use crate::error::PipelineError;
use crate::model::OptionsTable;
use crate::model::table::REQUIRED_COLUMNS;

/// Check that every required column is present.
///
/// All missing names are reported at once, in `Gamma, Delta, Vanna` order.
pub fn check_required_columns(table: &OptionsTable) -> Option<PipelineError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(PipelineError::Schema { missing })
    }
}
