//! Library endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        library::{Library, LibraryQuery, CreateLibrary, ReplaceLibrary, UpdateLibrary},
        MessageResponse,
    },
};

use super::{ValidatedJson, ValidatedQuery};

/// List libraries; code and name filters ignore case
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    params(LibraryQuery),
    responses(
        (status = 200, description = "List of libraries", body = Vec<Library>)
    )
)]
pub async fn list_libraries(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<LibraryQuery>,
) -> AppResult<Json<Vec<Library>>> {
    let libraries = state.services.libraries.list(&query).await?;
    Ok(Json(libraries))
}

/// Get library by ID
#[utoipa::path(
    get,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = Uuid, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library details", body = Library),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get_by_id(id).await?;
    Ok(Json(library))
}

/// Create library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 400, description = "Duplicate ID, code or name", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_library(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let library = state.services.libraries.create(data).await?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// Partially update library
#[utoipa::path(
    patch,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = Uuid, Path, description = "Library ID")),
    request_body = UpdateLibrary,
    responses(
        (status = 200, description = "Library updated", body = Library),
        (status = 400, description = "Code or name already used", body = crate::error::ErrorResponse),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_library(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<UpdateLibrary>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.update(id, data).await?;
    Ok(Json(library))
}

/// Replace library
#[utoipa::path(
    put,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = Uuid, Path, description = "Library ID")),
    request_body = ReplaceLibrary,
    responses(
        (status = 200, description = "Library replaced", body = Library),
        (status = 400, description = "Code or name already used", body = crate::error::ErrorResponse),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_library(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<ReplaceLibrary>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.replace(id, data).await?;
    Ok(Json(library))
}

/// Delete library
#[utoipa::path(
    delete,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = Uuid, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library deleted", body = MessageResponse),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_library(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.libraries.delete(id).await?;
    Ok(Json(MessageResponse::new("Library deleted successfully")))
}
