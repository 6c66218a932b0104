use axum::extract::State;
use axum::response::Html;

use crate::api::page;
use crate::api::state::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::index_html(state.max_upload_mb()))
}
