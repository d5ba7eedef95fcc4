use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::console::domain::CreateConsoleInput;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/consoles", tag = "consoles",
    responses(
        (status = 200, description = "All consoles", body = [crate::openapi::ConsoleDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::console::Model>>, JsonApiError> {
    let rows = state.consoles.list().await?;
    info!(count = rows.len(), "list consoles");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/consoles/{id}", tag = "consoles",
    params(("id" = i32, Path, description = "Console ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ConsoleDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<models::console::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.consoles.get(id).await?))
}

#[utoipa::path(
    post, path = "/consoles", tag = "consoles",
    request_body = crate::openapi::CreateConsoleRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ConsoleDoc),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateConsoleInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::console::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.consoles.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
