use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ValidationError,
    recipes::{
        catalog::{Recipe, RecipeCatalog},
        dto::CreateRecipeRequest,
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/:id", get(get_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let session = state.session.read().await;
    Json(session.catalog.recipes().to_vec())
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, (StatusCode, String)> {
    let session = state.session.read().await;
    match session.catalog.lookup(&id) {
        Some(recipe) => Ok(Json(recipe.clone())),
        None => Err((StatusCode::NOT_FOUND, "Recipe not found".into())),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), (StatusCode, String)> {
    let recipe = payload.into_recipe().map_err(|e| {
        warn!(error = %e, "invalid recipe");
        e
    })?;

    let mut session = state.session.write().await;
    if session.catalog.contains(&recipe.id) {
        return Err(ValidationError::DuplicateRecipe(recipe.id).into());
    }
    session.catalog.prepend(recipe.clone());
    info!(recipe_id = %recipe.id, "recipe created");
    Ok((StatusCode::CREATED, Json(recipe)))
}
