use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    dates::today_utc,
    logs::model::DailyLog,
    state::AppState,
    users::{
        dto::{OnboardingRequest, OnboardingResponse},
        model::User,
    },
};

pub fn onboarding_routes() -> Router<AppState> {
    Router::new().route("/onboarding", post(onboard))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me).put(update_me))
}

#[instrument(skip(state, payload))]
pub async fn onboard(
    State(state): State<AppState>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<Json<OnboardingResponse>, (StatusCode, String)> {
    let payload = payload.into_user();
    if let Err(e) = payload.validate() {
        warn!(error = %e, "invalid onboarding payload");
        return Err(e.into());
    }

    let today = today_utc();
    let mut session = state.session.write().await;
    let plan = session.onboard(payload.clone(), today).clone();
    let today_log = session
        .day(today)
        .cloned()
        .unwrap_or_else(|| DailyLog::empty(today));

    info!(
        plan_id = %plan.id,
        items = plan.items.len(),
        kcal_target = payload.preferences.kcal_target,
        "user onboarded"
    );
    Ok(Json(OnboardingResponse {
        user: payload,
        plan,
        today: today_log,
    }))
}

#[instrument(skip(state))]
pub async fn get_me(State(state): State<AppState>) -> Result<Json<User>, (StatusCode, String)> {
    let session = state.session.read().await;
    let user = session
        .user
        .clone()
        .ok_or((StatusCode::NOT_FOUND, "User not found".to_string()))?;
    Ok(Json(user))
}

/// Settings update. The stored plan is left as is.
#[instrument(skip(state, payload))]
pub async fn update_me(
    State(state): State<AppState>,
    Json(payload): Json<User>,
) -> Result<Json<User>, (StatusCode, String)> {
    payload.validate()?;

    let mut session = state.session.write().await;
    if session.user.is_none() {
        return Err((StatusCode::NOT_FOUND, "User not found".into()));
    }
    session.user = Some(payload.clone());
    info!(kcal_target = payload.preferences.kcal_target, "user updated");
    Ok(Json(payload))
}
