//! Conversion endpoint routing and handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use tempus_clock::{LatestValue, INVALID_INPUT_MESSAGE};
use tempus_convert::{to_date_string, to_epoch_seconds};
use tempus_core::EpochSeconds;

/// Shared handler state: the display cells the clock ticker writes to.
#[derive(Clone)]
pub struct AppState {
    pub epoch_display: Arc<LatestValue>,
    pub date_display: Arc<LatestValue>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/convert", get(convert))
        .fallback(not_found)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    s: Option<String>,
}

/// Route a raw query value through the converter.
/// Integer input converts to a date string; anything else parses as a
/// date string and converts to epoch seconds.
pub fn convert_value(raw: &str) -> Option<Value> {
    if let Ok(secs) = raw.trim().parse::<i64>() {
        let rendered = to_date_string(EpochSeconds::new(secs));
        return Some(Value::String(rendered.into_string()));
    }
    to_epoch_seconds(raw)
        .ok()
        .map(|ts| Value::Number(ts.as_secs().into()))
}

async fn convert(Query(params): Query<ConvertParams>) -> Response {
    let Some(raw) = params.s else {
        return invalid_input();
    };

    match convert_value(&raw) {
        Some(converted) => {
            debug!(input = %raw, output = %converted, "converted");
            Json(converted).into_response()
        }
        None => {
            debug!(input = %raw, "rejected");
            invalid_input()
        }
    }
}

async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "tempus",
        "epoch": state.epoch_display.get(),
        "date": state.date_display.get(),
    }))
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

fn invalid_input() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": INVALID_INPUT_MESSAGE })),
    )
        .into_response()
}
