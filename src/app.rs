use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            delete(handlers::delete_habit).put(handlers::update_habit),
        )
        .route("/api/habits/:id/toggle", post(handlers::toggle_completion))
        .route("/api/habits/:id/insights", post(handlers::habit_insights))
        .route("/api/export", get(handlers::export_csv))
        .with_state(state)
}
