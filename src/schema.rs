use schemars::{Schema, schema_for};

use crate::model::ChartSpec;

/// JSON Schema describing the chart handed to the renderer.
pub fn chart_spec_schema() -> Schema {
    schema_for!(ChartSpec)
}

/// Print the `ChartSpec` JSON Schema.
pub fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&chart_spec_schema())?);
    Ok(())
}
