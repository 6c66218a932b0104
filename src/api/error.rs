use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::PipelineError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// The pipeline rejected the upload. `columns` is set when the file was
    /// parsed, so the page can offer substitute column choices.
    Pipeline {
        error: PipelineError,
        columns: Option<Vec<String>>,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            ApiError::Pipeline { error, columns } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": format!("Error processing file: {error}"),
                    "kind": error.kind(),
                    "columns": columns,
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        ApiError::Pipeline {
            error,
            columns: None,
        }
    }
}

