//! Form application.
//!
//! Serves the root view and turns form posts from the primitives into view events. Every
//! request takes the view lock for its whole update, so events apply one at a time.

use axum::{
    extract::{Path, State},
    response::{Html, Json, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use api_shared::{HealthRes, HealthService};
use audience_core::{Event, TargetAudience};

use crate::SharedView;

#[derive(Clone)]
struct AppState {
    view: SharedView,
}

/// Body of `POST /condition`.
#[derive(Debug, Deserialize)]
pub struct ConditionForm {
    #[serde(default)]
    pub condition: String,
}

/// Build the form UI router around `view`.
pub fn router(view: SharedView) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/summary", get(summary))
        .route("/condition", post(select_condition))
        .route("/subcategories/:id/toggle", post(toggle_sub_category))
        .route("/medications/:id/toggle", post(toggle_medication))
        .with_state(AppState { view })
}

#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.view.read().await.render_page())
}

#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health("Audience form UI"))
}

/// Current target audience summary, `null` when no condition is selected.
#[axum::debug_handler]
async fn summary(State(state): State<AppState>) -> Json<Option<TargetAudience>> {
    Json(state.view.read().await.target_audience())
}

#[axum::debug_handler]
async fn select_condition(
    State(state): State<AppState>,
    Form(form): Form<ConditionForm>,
) -> Redirect {
    tracing::debug!("condition selected: {:?}", form.condition);
    state.view.write().await.select_condition_value(&form.condition);
    Redirect::to("/")
}

#[axum::debug_handler]
async fn toggle_sub_category(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state
        .view
        .write()
        .await
        .dispatch(Event::ToggleSubCategory(id));
    Redirect::to("/")
}

#[axum::debug_handler]
async fn toggle_medication(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.view.write().await.dispatch(Event::ToggleMedication(id));
    Redirect::to("/")
}
