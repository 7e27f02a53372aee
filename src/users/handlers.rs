use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, error, instrument};

use crate::{error::ApiError, state::AppState, users::dto::UserItem};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserItem>>, ApiError> {
    let users = state.users.list_all().await.map_err(|e| {
        error!(error = %e, "list users failed");
        ApiError::from(e)
    })?;
    debug!(count = users.len(), "users listed");
    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}
