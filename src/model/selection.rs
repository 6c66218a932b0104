use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Default bubble size cap, in pixels.
pub const DEFAULT_SIZE_MAX: u32 = 40;
/// Smallest allowed bubble size cap.
pub const MIN_SIZE_MAX: u32 = 10;
/// Largest allowed bubble size cap.
pub const MAX_SIZE_MAX: u32 = 100;

/// The four user-selectable chart channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    X,
    Y,
    Color,
    Hover,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 4] = [
        ColumnRole::X,
        ColumnRole::Y,
        ColumnRole::Color,
        ColumnRole::Hover,
    ];

    /// Column used when the user has not picked one.
    pub fn default_column(self) -> &'static str {
        match self {
            ColumnRole::X => "Delta",
            ColumnRole::Y => "Vanna",
            ColumnRole::Color => "Moneyness",
            ColumnRole::Hover => "Option_Type",
        }
    }

    /// Label of the matching dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ColumnRole::X => "X-Axis",
            ColumnRole::Y => "Y-Axis",
            ColumnRole::Color => "Color By",
            ColumnRole::Hover => "Hover Info",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column choices as submitted by the shell. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,
}

impl SelectionRequest {
    /// The requested column for a role, falling back to its default.
    /// Blank strings count as "not chosen".
    pub fn column_for(&self, role: ColumnRole) -> &str {
        let chosen = match role {
            ColumnRole::X => &self.x,
            ColumnRole::Y => &self.y,
            ColumnRole::Color => &self.color,
            ColumnRole::Hover => &self.hover,
        };
        chosen
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| role.default_column())
    }
}

/// A column name resolved against a concrete table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedColumn {
    pub name: String,
    pub index: usize,
}

/// Resolved x / y / color / hover references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChartSelection {
    pub x: ResolvedColumn,
    pub y: ResolvedColumn,
    pub color: ResolvedColumn,
    pub hover: ResolvedColumn,
}

/// Per-run chart options coming from the sidebar widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub size_max: u32,
    pub show_data: bool,
}

impl ChartSettings {
    pub fn new(size_max: u32, show_data: bool) -> PipelineResult<Self> {
        let settings = Self {
            size_max,
            show_data,
        };
        settings.check()?;
        Ok(settings)
    }

    /// Reject a bubble size cap outside the slider range.
    pub fn check(&self) -> PipelineResult<()> {
        if !(MIN_SIZE_MAX..=MAX_SIZE_MAX).contains(&self.size_max) {
            return Err(PipelineError::InvalidSetting {
                name: "Maximum Bubble Size".to_string(),
                value: i64::from(self.size_max),
                min: i64::from(MIN_SIZE_MAX),
                max: i64::from(MAX_SIZE_MAX),
            });
        }
        Ok(())
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            size_max: DEFAULT_SIZE_MAX,
            show_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_falls_back_to_defaults() {
        let req = SelectionRequest {
            x: Some("Strike".into()),
            hover: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(req.column_for(ColumnRole::X), "Strike");
        assert_eq!(req.column_for(ColumnRole::Y), "Vanna");
        assert_eq!(req.column_for(ColumnRole::Color), "Moneyness");
        assert_eq!(req.column_for(ColumnRole::Hover), "Option_Type");
    }

    #[test]
    fn test_size_max_bounds() {
        assert!(ChartSettings::new(10, false).is_ok());
        assert!(ChartSettings::new(100, true).is_ok());
        let err = ChartSettings::new(9, false).unwrap_err();
        assert_eq!(err.kind(), "invalid_setting");
        assert!(ChartSettings::new(101, false).is_err());
        assert_eq!(ChartSettings::default().size_max, 40);
    }
}
