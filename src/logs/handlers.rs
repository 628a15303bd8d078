use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    dates::today_utc,
    error::not_onboarded,
    logs::{
        dto::{LogMealResponse, TodayItem, TodayView},
        model::DailyLog,
    },
    plans::model::PlanItem,
    recipes::catalog::RecipeCatalog,
    state::AppState,
};

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/today", get(today_log))
        .route("/logs/meals", post(log_meal))
        .route("/today", get(today_view))
}

#[instrument(skip(state))]
pub async fn list_logs(State(state): State<AppState>) -> Json<Vec<DailyLog>> {
    let session = state.session.read().await;
    Json(session.logs.clone())
}

/// Today's log, opened on first access after onboarding.
#[instrument(skip(state))]
pub async fn today_log(State(state): State<AppState>) -> Result<Json<DailyLog>, (StatusCode, String)> {
    let today = today_utc();
    let mut session = state.session.write().await;
    if session.user.is_none() {
        return Err(not_onboarded());
    }
    session.open_day(today);
    let log = session
        .day(today)
        .cloned()
        .unwrap_or_else(|| DailyLog::empty(today));
    Ok(Json(log))
}

#[instrument(skip(state, payload), fields(recipe_id = %payload.recipe_id))]
pub async fn log_meal(
    State(state): State<AppState>,
    Json(payload): Json<PlanItem>,
) -> Result<Json<LogMealResponse>, (StatusCode, String)> {
    if let Err(e) = payload.validate() {
        warn!(error = %e, "invalid plan item");
        return Err(e.into());
    }

    let today = today_utc();
    let mut session = state.session.write().await;
    if session.user.is_none() {
        return Err(not_onboarded());
    }
    let outcome = session.log_meal(&payload, today, OffsetDateTime::now_utc());
    let log = session
        .day(today)
        .cloned()
        .unwrap_or_else(|| DailyLog::empty(today));

    info!(?outcome, total_kcal = log.totals.kcal, "log_meal handled");
    Ok(Json(LogMealResponse { outcome, log }))
}

#[instrument(skip(state))]
pub async fn today_view(State(state): State<AppState>) -> Result<Json<TodayView>, (StatusCode, String)> {
    let today = today_utc();
    let mut session = state.session.write().await;
    let Some(kcal_target) = session.user.as_ref().map(|u| u.preferences.kcal_target) else {
        return Err(not_onboarded());
    };
    session.open_day(today);

    let log = session.day(today).cloned().unwrap_or_else(|| DailyLog::empty(today));
    let items = session
        .plan
        .iter()
        .flat_map(|p| p.items_on(today))
        .map(|item| TodayItem {
            recipe_title: session.catalog.lookup(&item.recipe_id).map(|r| r.title.clone()),
            logged: log.has_meal(&item.recipe_id),
            item: item.clone(),
        })
        .collect();

    Ok(Json(TodayView {
        date: today,
        kcal_target,
        totals: log.totals,
        items,
    }))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::dates::today_utc;
    use crate::recipes::catalog::PROTEIN_SHAKE_ID;
    use crate::state::AppState;
    use crate::test_support::{onboarding_body, send};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    fn item(recipe_id: &str, servings: f64) -> Value {
        json!({
            "date": today_utc().to_string(),
            "meal_slot": "lunch",
            "recipeId": recipe_id,
            "servings": servings
        })
    }

    async fn onboarded() -> axum::Router {
        let app = build_app(AppState::fake());
        send(&app, Method::POST, "/api/v1/onboarding", Some(onboarding_body(Some(100.0)))).await;
        app
    }

    #[tokio::test]
    async fn logging_requires_onboarding() {
        let app = build_app(AppState::fake());
        let (status, _) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_2", 1.0))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let (status, _) = send(&app, Method::GET, "/api/v1/logs/today", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn today_is_open_after_onboarding() {
        let app = onboarded().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/logs/today", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], today_utc().to_string());
        assert_eq!(body["entries"].as_array().unwrap().len(), 0);

        let (_, logs) = send(&app, Method::GET, "/api/v1/logs", None).await;
        assert_eq!(logs.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn logs_a_meal_once_per_day() {
        let app = onboarded().await;

        // 280 kcal per serving, two servings.
        let (status, body) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_2", 2.0))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "logged");
        let entries = body["log"]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["type"], "meal");
        assert_eq!(entries[0]["details"]["est_kcal"], 560.0);
        assert_eq!(body["log"]["totals"]["kcal"], 560.0);
        assert_eq!(body["log"]["totals"]["protein_g"], 20.0);

        let (_, again) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_2", 1.0))).await;
        assert_eq!(again["outcome"], "already_logged");
        assert_eq!(again["log"], body["log"]);
    }

    #[tokio::test]
    async fn totals_accumulate_across_recipes() {
        let app = onboarded().await;
        send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_2", 2.0))).await;
        let (_, body) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item(PROTEIN_SHAKE_ID, 1.0))).await;
        assert_eq!(body["log"]["entries"].as_array().unwrap().len(), 2);
        assert_eq!(body["log"]["totals"]["kcal"], 680.0);
        assert_eq!(body["log"]["totals"]["protein_g"], 45.0);
    }

    #[tokio::test]
    async fn unknown_recipe_is_a_no_op() {
        let app = onboarded().await;
        let (status, body) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item("ghost", 1.0))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "unknown_recipe");
        assert_eq!(body["log"]["entries"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn rejects_zero_servings() {
        let app = onboarded().await;
        let (status, _) = send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_2", 0.0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn today_view_flags_logged_items() {
        let app = onboarded().await;
        send(&app, Method::POST, "/api/v1/logs/meals", Some(item("sys_recipe_4", 1.0))).await;

        let (status, body) = send(&app, Method::GET, "/api/v1/today", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kcal_target"], 1800);
        assert_eq!(body["totals"]["kcal"], 410.0);
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["recipeId"], "sys_recipe_4");
        assert_eq!(items[0]["recipe_title"], "Potato & Veggie Hash");
        assert_eq!(items[0]["logged"], true);
        assert!(items[1..].iter().all(|i| i["logged"] == false));
        assert_eq!(items[4]["recipeId"], PROTEIN_SHAKE_ID);
    }
}
