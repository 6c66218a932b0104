use axum::Json;
use schemars::Schema;

use crate::schema::chart_spec_schema;

pub async fn chart_spec() -> Json<Schema> {
    Json(chart_spec_schema())
}
