use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything the renderer needs besides the table itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartSpec {
    /// Chart title, e.g. "Options Exposure: Delta vs Vanna".
    pub title: String,
    /// Column plotted on the horizontal axis.
    pub x: String,
    /// Column plotted on the vertical axis.
    pub y: String,
    /// Column driving marker color.
    pub color: String,
    /// Column shown in bold as the hover title.
    pub hover_name: String,
    /// Column driving marker area. Always the normalized gamma exposure.
    pub size: String,
    /// Largest marker diameter in pixels (10-100).
    pub size_max: u32,
    /// Extra columns listed in the hover box, in table order.
    pub hover_data: Vec<String>,
    /// Display labels overriding raw column names.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Cosmetic layout settings.
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Display label for a column, honoring `labels`.
    pub fn label<'a>(&'a self, column: &'a str) -> &'a str {
        self.labels.get(column).map(String::as_str).unwrap_or(column)
    }
}

/// Colors and fonts applied to the figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartStyle {
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub hover_bgcolor: String,
    pub hover_font_size: u32,
    pub hover_font_family: String,
    pub grid_color: String,
    pub axis_title_font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            plot_bgcolor: "#f8f9fa".to_string(),
            paper_bgcolor: "white".to_string(),
            hover_bgcolor: "white".to_string(),
            hover_font_size: 14,
            hover_font_family: "monospace".to_string(),
            grid_color: "#e9ecef".to_string(),
            axis_title_font_size: 18,
        }
    }
}
