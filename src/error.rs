use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Everything that can stop a single pipeline run.
///
/// Variants hold owned strings rather than source errors so a failure can be
/// cloned into both halves of a [`crate::pipeline::PipelineRun`] and compared
/// in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Could not read spreadsheet: {message}")]
    Parse { message: String },

    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Column `{column}` row {row}: expected a number, found {value}")]
    Type {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Cannot normalize gamma exposure: {message}")]
    Computation { message: String },

    #[error("{role} column `{column}` not found in the uploaded table")]
    UnresolvedColumn { role: String, column: String },

    #[error("{name} must be within {min}..={max}, got {value}")]
    InvalidSetting {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl PipelineError {
    pub(crate) fn parse(message: impl std::fmt::Display) -> Self {
        PipelineError::Parse {
            message: message.to_string(),
        }
    }

    /// Stable tag used by the web UI to decide how to present the error.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Parse { .. } => "parse_error",
            PipelineError::Schema { .. } => "schema_error",
            PipelineError::Type { .. } => "type_error",
            PipelineError::Computation { .. } => "computation_error",
            PipelineError::UnresolvedColumn { .. } => "unresolved_column_error",
            PipelineError::InvalidSetting { .. } => "invalid_setting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_lists_every_column() {
        let err = PipelineError::Schema {
            missing: vec!["Gamma".into(), "Vanna".into()],
        };
        assert_eq!(err.to_string(), "Missing required columns: Gamma, Vanna");
        assert_eq!(err.kind(), "schema_error");
    }

    #[test]
    fn test_type_message_names_row() {
        let err = PipelineError::Type {
            column: "Gamma".into(),
            row: 3,
            value: "\"n/a\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "Column `Gamma` row 3: expected a number, found \"n/a\""
        );
    }
}
