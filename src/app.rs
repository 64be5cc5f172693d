#![cfg(feature = "web")]
use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::downloader;
use crate::extractor::Extractor;
use crate::record::Record;
use crate::view::View;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Immutable per-process state shared by every handler.
pub struct AppState {
    extractor: Extractor,
    view: View,
}

impl AppState {
    pub fn new(extractor: Extractor, view: View) -> Self {
        AppState { extractor, view }
    }

    pub fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let extractor = Extractor::new(&config.source.sheet_url, config.source.timeout())?;
        Ok(AppState::new(extractor, View::new()?))
    }
}

#[derive(Serialize)]
struct RecordsResponse<'a> {
    status: &'static str,
    count: usize,
    records: &'a [Record],
}

#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    kind: &'static str,
    message: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/refresh", get(serve_index))
        .route("/api/records", get(get_records))
        .route("/download.csv", get(download_csv))
        .route("/download.xlsx", get(download_xlsx))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Serving sheet {}", config.source.sheet_url);
    axum::serve(listener, app).await?;

    Ok(())
}

// Both `/` and `/refresh` land here; a failed fetch renders an empty table.
async fn serve_index(State(state): State<Arc<AppState>>) -> Response {
    let records = state.extractor.fetch_and_transform().await;

    match state
        .view
        .render_index(state.extractor.mapping(), &records)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn get_records(State(state): State<Arc<AppState>>) -> Response {
    match state.extractor.try_fetch_and_transform().await {
        Ok(records) => Json(RecordsResponse {
            status: "ok",
            count: records.len(),
            records: &records,
        })
        .into_response(),
        Err(e) => {
            error!("Extraction failed ({}): {}", e.kind(), e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    status: "error",
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn download_csv(State(state): State<Arc<AppState>>) -> Response {
    let records = state.extractor.fetch_and_transform().await;
    let csv = downloader::to_csv(state.extractor.mapping(), &records);

    attachment("text/csv; charset=utf-8", "records.csv", csv.into_bytes())
}

async fn download_xlsx(State(state): State<Arc<AppState>>) -> Response {
    let records = state.extractor.fetch_and_transform().await;

    match downloader::to_xlsx(state.extractor.mapping(), &records) {
        Ok(buffer) => attachment(XLSX_MIME, "records.xlsx", buffer),
        Err(e) => {
            error!("Failed to build XLSX export: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build XLSX export").into_response()
        }
    }
}

fn attachment(content_type: &'static str, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response()
}
