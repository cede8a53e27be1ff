// HTTP request handlers
use crate::application::refresh_dispatcher::RefreshReport;
use crate::domain::filter::{FilterOptions, FilterState};
use crate::domain::panel::Panel;
use crate::domain::view::ViewId;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn bad_request(message: impl ToString) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[derive(Serialize)]
pub struct ActiveView {
    pub view: ViewId,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn filter_options(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    Json(state.controller.filter_options())
}

pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FilterState> {
    Json(state.controller.filter_state())
}

/// Replace the filter and refresh the active view
pub async fn apply_filters(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FilterState>, JsonRejection>,
) -> Response {
    let Json(next) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    match state.controller.apply(next).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => bad_request(e),
    }
}

pub async fn clear_filters(State(state): State<Arc<AppState>>) -> Json<RefreshReport> {
    Json(state.controller.clear().await)
}

pub async fn active_view(State(state): State<Arc<AppState>>) -> Json<ActiveView> {
    Json(ActiveView {
        view: state.controller.active_view(),
    })
}

/// Switch pages; activating the current page forces a refresh
pub async fn activate_view(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match id.parse::<ViewId>() {
        Ok(view) => Json(state.controller.activate(view).await).into_response(),
        Err(e) => bad_request(e),
    }
}

pub async fn panels(State(state): State<Arc<AppState>>) -> Json<BTreeMap<String, Panel>> {
    Json(state.panels.snapshot())
}
