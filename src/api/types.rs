use serde::Serialize;

use crate::model::ChartSpec;
use crate::pipeline::Stage;

// ── Request types ────────────────────────────────────────────────────

/// Fields of the multipart form posted by the upload page.
pub struct AnalyzeForm {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
    pub hover: Option<String>,
    pub size_max: Option<u32>,
    pub show_data: bool,
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AnalyzeResponse {
    /// Every column of the transformed table, for the four dropdowns.
    pub columns: Vec<String>,
    pub spec: ChartSpec,
    /// Plotly figure (`data` + `layout`).
    pub figure: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_html: Option<String>,
    pub stage: Stage,
    pub rows: usize,
}
