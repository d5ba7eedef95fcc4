use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::game::domain::CreateGameInput;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/games", tag = "games",
    responses(
        (status = 200, description = "All games", body = [crate::openapi::GameDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::game::Model>>, JsonApiError> {
    let rows = state.games.list().await?;
    info!(count = rows.len(), "list games");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/games/{id}", tag = "games",
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GameDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<models::game::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.games.get(id).await?))
}

#[utoipa::path(
    post, path = "/games", tag = "games",
    request_body = crate::openapi::CreateGameRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::GameDoc),
        (status = 409, description = "Title already taken or console does not exist"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateGameInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::game::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.games.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
