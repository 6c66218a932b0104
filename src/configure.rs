//! Chart configuration: resolve the four column choices against a table and
//! assemble the [`ChartSpec`] handed to the renderer.

use std::collections::BTreeMap;

use crate::error::{PipelineError, PipelineResult};
use crate::model::table::{DERIVED_COLUMNS, GAMMA_SCALED};
use crate::model::{
    ChartSelection, ChartSettings, ChartSpec, ChartStyle, ColumnRole, OptionsTable,
    ResolvedColumn, SelectionRequest,
};

/// Resolve every role to a column of `table`, applying defaults for roles the
/// request leaves open.
pub fn resolve(table: &OptionsTable, request: &SelectionRequest) -> PipelineResult<ChartSelection> {
    let pick = |role: ColumnRole| -> PipelineResult<ResolvedColumn> {
        let name = request.column_for(role);
        let index = table
            .column_index(name)
            .ok_or_else(|| PipelineError::UnresolvedColumn {
                role: role.label().to_string(),
                column: name.to_string(),
            })?;
        Ok(ResolvedColumn {
            name: name.to_string(),
            index,
        })
    };

    Ok(ChartSelection {
        x: pick(ColumnRole::X)?,
        y: pick(ColumnRole::Y)?,
        color: pick(ColumnRole::Color)?,
        hover: pick(ColumnRole::Hover)?,
    })
}

/// Columns listed in the hover box: everything except the derived columns.
pub fn hover_data(table: &OptionsTable) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|c| !DERIVED_COLUMNS.contains(&c.as_str()))
        .cloned()
        .collect()
}

/// Build the renderer input for a transformed table.
pub fn build_spec(
    table: &OptionsTable,
    request: &SelectionRequest,
    settings: &ChartSettings,
) -> PipelineResult<ChartSpec> {
    settings.check()?;
    let selection = resolve(table, request)?;

    if !table.has_column(GAMMA_SCALED) {
        return Err(PipelineError::UnresolvedColumn {
            role: "Bubble size".to_string(),
            column: GAMMA_SCALED.to_string(),
        });
    }

    let mut labels = BTreeMap::new();
    labels.insert(
        GAMMA_SCALED.to_string(),
        "Normalized Gamma Exposure".to_string(),
    );

    Ok(ChartSpec {
        title: format!(
            "Options Exposure: {} vs {}",
            selection.x.name, selection.y.name
        ),
        x: selection.x.name,
        y: selection.y.name,
        color: selection.color.name,
        hover_name: selection.hover.name,
        size: GAMMA_SCALED.to_string(),
        size_max: settings.size_max,
        hover_data: hover_data(table),
        labels,
        style: ChartStyle::default(),
    })
}
