pub mod handlers;
pub mod model;
pub mod services;
pub mod template;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::plan_routes())
}
