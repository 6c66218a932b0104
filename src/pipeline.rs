//! The whole read-validate-transform-configure flow as one pure function.
//!
//! Shells call [`run`] on every interaction and display whatever comes back;
//! nothing is cached between runs.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::model::{ChartSettings, ChartSpec, OptionsTable, SelectionRequest};
use crate::{configure, ingest, transform, validate};

/// Furthest step a run reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    FileReceived,
    Parsed,
    Validated,
    Transformed,
    Configured,
}

/// Outcome of one run.
///
/// When the table fails the chart carries the same error. When only the
/// chart fails the transformed table is kept, so the shell can still offer
/// the column list for picking substitutes.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub table: Result<OptionsTable, PipelineError>,
    pub chart: Result<ChartSpec, PipelineError>,
    /// Last stage completed successfully.
    pub stage: Stage,
}

impl PipelineRun {
    fn failed(stage: Stage, err: PipelineError) -> Self {
        warn!(?stage, kind = err.kind(), "pipeline stopped: {err}");
        Self {
            table: Err(err.clone()),
            chart: Err(err),
            stage,
        }
    }

    /// First error of the run, if any.
    pub fn error(&self) -> Option<&PipelineError> {
        self.table.as_ref().err().or(self.chart.as_ref().err())
    }

    pub fn is_ok(&self) -> bool {
        self.stage == Stage::Configured
    }
}

/// Parse, validate, transform and configure one upload.
pub fn run(bytes: &[u8], request: &SelectionRequest, settings: &ChartSettings) -> PipelineRun {
    debug!(bytes = bytes.len(), "file received");

    let table = match ingest::read_xlsx(bytes) {
        Ok(t) => t,
        Err(e) => return PipelineRun::failed(Stage::FileReceived, e),
    };
    run_table(table, request, settings)
}

/// Same as [`run`] for a table that is already parsed.
pub fn run_table(
    table: OptionsTable,
    request: &SelectionRequest,
    settings: &ChartSettings,
) -> PipelineRun {
    if let Err(mut errors) = validate::validate(&table) {
        return PipelineRun::failed(Stage::Parsed, errors.swap_remove(0));
    }

    let table = match transform::apply_exposure(&table) {
        Ok(t) => t,
        Err(e) => return PipelineRun::failed(Stage::Validated, e),
    };

    match configure::build_spec(&table, request, settings) {
        Ok(chart) => {
            info!(
                rows = table.row_count(),
                columns = table.columns().len(),
                x = %chart.x,
                y = %chart.y,
                "chart configured"
            );
            PipelineRun {
                table: Ok(table),
                chart: Ok(chart),
                stage: Stage::Configured,
            }
        }
        Err(e) => {
            warn!(kind = e.kind(), "chart not configured: {e}");
            PipelineRun {
                table: Ok(table),
                chart: Err(e),
                stage: Stage::Transformed,
            }
        }
    }
}
