use axum::Json;
use axum::extract::Multipart;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeForm, AnalyzeResponse};
use crate::model::selection::DEFAULT_SIZE_MAX;
use crate::model::{ChartSettings, SelectionRequest};
use crate::{pipeline, render};

pub async fn analyze(multipart: Multipart) -> Result<Json<AnalyzeResponse>, ApiError> {
    let form = read_form(multipart).await?;
    if form.bytes.is_empty() {
        return Err(ApiError::BadRequest("no file uploaded".into()));
    }

    let settings = ChartSettings::new(form.size_max.unwrap_or(DEFAULT_SIZE_MAX), form.show_data)?;
    let request = SelectionRequest {
        x: form.x,
        y: form.y,
        color: form.color,
        hover: form.hover,
    };
    let file_name = form.file_name.unwrap_or_else(|| "upload.xlsx".to_string());
    let bytes = form.bytes;

    let run = tokio::task::spawn_blocking(move || pipeline::run(&bytes, &request, &settings))
        .await
        .map_err(|e| ApiError::Internal(format!("pipeline task failed: {e}")))?;

    let stage = run.stage;
    let (table, spec) = match (run.table, run.chart) {
        (Ok(table), Ok(spec)) => (table, spec),
        (Ok(table), Err(error)) => {
            return Err(ApiError::Pipeline {
                error,
                columns: Some(table.columns().to_vec()),
            });
        }
        (Err(error), _) => return Err(error.into()),
    };

    info!(file = %file_name, rows = table.row_count(), "rendered upload");

    Ok(Json(AnalyzeResponse {
        columns: table.columns().to_vec(),
        figure: render::figure(&table, &spec),
        preview_html: settings
            .show_data
            .then(|| render::preview_html(&render::preview(&table))),
        spec,
        stage,
        rows: table.row_count(),
    }))
}

/// Collect the multipart fields posted by the upload page.
///
/// Blank text fields count as "not chosen"; unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, ApiError> {
    let mut form = AnalyzeForm {
        file_name: None,
        bytes: Vec::new(),
        x: None,
        y: None,
        color: None,
        hover: None,
        size_max: None,
        show_data: false,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("multipart error: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            form.file_name = field.file_name().map(str::to_string);
            form.bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("reading file: {e}")))?
                .to_vec();
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("reading field {name}: {e}")))?;
        let value = Some(text.trim().to_string()).filter(|v| !v.is_empty());

        match name.as_str() {
            "x" => form.x = value,
            "y" => form.y = value,
            "color" => form.color = value,
            "hover" => form.hover = value,
            "size_max" => {
                form.size_max = value
                    .map(|v| {
                        v.parse::<u32>().map_err(|_| {
                            ApiError::BadRequest(format!("size_max must be an integer, got '{v}'"))
                        })
                    })
                    .transpose()?;
            }
            "show_data" => {
                form.show_data = matches!(value.as_deref(), Some("true" | "on" | "1"));
            }
            _ => {}
        }
    }

    Ok(form)
}
