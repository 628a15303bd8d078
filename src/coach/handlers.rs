use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    coach::dto::{ChatMessage, SendMessageRequest, SendMessageResponse, Sender},
    error::not_onboarded,
    state::AppState,
};

pub fn coach_routes() -> Router<AppState> {
    Router::new().route("/coach/messages", get(list_messages).post(send_message))
}

#[instrument(skip(state))]
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    let session = state.session.read().await;
    Json(session.chat.clone())
}

/// Sends a prompt to the coach. Only one prompt may be in flight at a time.
#[instrument(skip(state, payload))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, (StatusCode, String)> {
    let prompt = payload.validate()?.to_string();

    let Ok(_in_flight) = state.coach_gate.try_lock() else {
        warn!("coach prompt rejected; previous prompt still pending");
        return Err((StatusCode::CONFLICT, "coach is still answering".into()));
    };

    let (user, history) = {
        let session = state.session.read().await;
        let user = session.user.clone().ok_or_else(not_onboarded)?;
        (user, session.chat.clone())
    };

    let reply = match state.coach.respond(&prompt, &user, &history).await {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "coach respond failed");
            return Err((StatusCode::BAD_GATEWAY, e.to_string()));
        }
    };

    let mut session = state.session.write().await;
    session
        .chat
        .push(ChatMessage::text(format!("user_{}", Uuid::new_v4().simple()), Sender::User, prompt));
    session.chat.push(reply.clone());

    // New recipes land in the catalog before the plan is augmented against it.
    let recipes_added = reply
        .recipes
        .as_deref()
        .map(|r| session.add_recipes(r))
        .unwrap_or(0);
    let adopted_plan = reply.plan.clone().map(|p| session.save_plan(p).clone());

    info!(
        reply_id = %reply.id,
        recipes_added,
        plan_adopted = adopted_plan.is_some(),
        "coach replied"
    );
    Ok(Json(SendMessageResponse {
        reply,
        adopted_plan,
        recipes_added,
    }))
}
