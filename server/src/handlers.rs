use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

pub async fn root_handler(
    axum::Extension(index_file): axum::Extension<PathBuf>,
) -> impl IntoResponse {
    match tokio::fs::read_to_string(&index_file).await {
        Ok(contents) => Html(contents).into_response(),
        Err(error) => {
            tracing::error!(%error, path = %index_file.display(), "failed to read index page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
