use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{plans::model::Plan, state::AppState};

pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/plan", get(get_plan).put(save_plan))
}

#[instrument(skip(state))]
pub async fn get_plan(State(state): State<AppState>) -> Result<Json<Plan>, (StatusCode, String)> {
    let session = state.session.read().await;
    let plan = session
        .plan
        .clone()
        .ok_or((StatusCode::NOT_FOUND, "No plan yet".to_string()))?;
    Ok(Json(plan))
}

/// Adopts a plan, augmenting it against the current user's protein target.
#[instrument(skip(state, payload), fields(plan_id = %payload.id))]
pub async fn save_plan(
    State(state): State<AppState>,
    Json(payload): Json<Plan>,
) -> Result<Json<Plan>, (StatusCode, String)> {
    if let Err(e) = payload.validate() {
        warn!(error = %e, "invalid plan");
        return Err(e.into());
    }

    let mut session = state.session.write().await;
    let before = payload.items.len();
    let saved = session.save_plan(payload).clone();
    info!(inserted = saved.items.len() - before, "plan stored");
    Ok(Json(saved))
}
