//! Routes for the hosted session.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use forkpath_content::path::Direction;
use forkpath_content::resolver::ImageKey;
use forkpath_narrative::application::query_handlers::DisplayPayload;
use forkpath_narrative::domain::commands;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::assets::AssetResolver;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    /// `L`, `R`, `left` or `right`.
    pub direction: String,
}

/// One selectable choice.
#[derive(Debug, Serialize)]
pub struct ChoiceView {
    /// The direction symbol.
    pub direction: Direction,
    /// Button label.
    pub label: &'static str,
}

/// The screen to render, with the image key resolved to a URL.
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// Screen heading.
    pub title: String,
    /// Story fragment or ending.
    pub body_text: String,
    /// Scene image key.
    pub image_key: ImageKey,
    /// Scene image URL.
    pub image_url: String,
    /// Status line.
    pub meta_line: String,
    /// Whether the run has ended.
    pub is_terminal: bool,
    /// Current depth.
    pub depth: u32,
    /// Choices taken so far, e.g. `LR`.
    pub path: String,
    /// Choices on offer.
    pub available_choices: Vec<Direction>,
    /// Choices on offer, with labels.
    pub choices: Vec<ChoiceView>,
}

impl SessionView {
    fn render(payload: DisplayPayload, assets: &AssetResolver) -> Self {
        let choices = payload
            .available_choices
            .iter()
            .map(|&direction| ChoiceView {
                direction,
                label: direction.label(),
            })
            .collect();

        Self {
            image_url: assets.image_url(payload.image_key),
            title: payload.title,
            body_text: payload.body_text,
            image_key: payload.image_key,
            meta_line: payload.meta_line,
            is_terminal: payload.is_terminal,
            depth: payload.depth,
            path: payload.path.to_string(),
            available_choices: payload.available_choices,
            choices,
        }
    }
}

/// GET /
async fn current(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let payload = state.session()?.current_payload();
    Ok(Json(SessionView::render(payload, &state.assets)))
}

/// POST /choice
#[instrument(skip(state, request), fields(direction = %request.direction))]
async fn choose(
    State(state): State<AppState>,
    Json(request): Json<ChoiceRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let direction: Direction = request.direction.parse()?;
    let command = commands::MakeChoice {
        correlation_id: Uuid::new_v4(),
        direction,
    };

    info!(correlation_id = %command.correlation_id, "handling make_choice command");

    let payload = state.session()?.handle_make_choice(&command);
    Ok(Json(SessionView::render(payload, &state.assets)))
}

/// POST /restart
#[instrument(skip(state))]
async fn restart(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let command = commands::RestartRun {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling restart_run command");

    let payload = state.session()?.handle_restart_run(&command);
    Ok(Json(SessionView::render(payload, &state.assets)))
}

/// Returns the router for the session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current))
        .route("/choice", post(choose))
        .route("/restart", post(restart))
}
