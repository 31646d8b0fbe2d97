//! Axum hosting layer.
//!
//! One dashboard page plus a health probe. Static mode serves HTML
//! rendered once at startup; interactive mode recomputes the snapshot on
//! every request.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tera::Tera;
use tower_http::cors::CorsLayer;

use crate::config::DashboardMode;
use crate::render;
use crate::reports::ReportCatalog;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub mode: DashboardMode,
    pub catalog: Arc<ReportCatalog>,
    pub templates: Tera,
    /// Page rendered once at startup (static mode only).
    pub cached_page: Option<Arc<String>>,
}

#[derive(Debug)]
pub enum AppError {
    Template(tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Template(e) => format!("Template error: {}", e),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        AppError::Template(e)
    }
}

/// Register the embedded templates.
pub fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("base.html", render::templates::BASE)?;
    tera.add_raw_template("index.html", render::templates::INDEX)?;
    Ok(tera)
}

/// Build the application state for the selected mode.
///
/// In static mode this runs the whole catalog once and pre-renders the
/// page; the snapshot is never recomputed afterwards.
pub fn build_state(mode: DashboardMode, catalog: ReportCatalog) -> tera::Result<AppState> {
    let templates = load_templates()?;
    let catalog = Arc::new(catalog);

    let cached_page = match mode {
        DashboardMode::Static => {
            let snapshot = catalog.snapshot();
            let page = render::dashboard_page(&templates, &snapshot, mode)?;
            Some(Arc::new(page))
        }
        DashboardMode::Interactive => None,
    };

    Ok(AppState {
        mode,
        catalog,
        templates,
        cached_page,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Render the dashboard page.
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    if let Some(page) = &state.cached_page {
        return Ok(Html(page.as_ref().clone()));
    }

    // Interactive refresh: the queries run inline, so a slow query stalls
    // this request (single-threaded refresh model, by contract).
    let snapshot = state.catalog.snapshot();
    let html = render::dashboard_page(&state.templates, &snapshot, state.mode)?;
    Ok(Html(html))
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
