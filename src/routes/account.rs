use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::auth::UserProfile,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(account))
}

#[utoipa::path(
    get,
    path = "/api/account",
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<UserProfile>),
        (status = 401, description = "Not logged in"),
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn account(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = auth_service::profile(&state, &user)?;
    Ok(Json(resp))
}
