//! Address endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        address::{Address, AddressQuery, CreateAddress, ReplaceAddress, UpdateAddress},
        MessageResponse,
    },
};

use super::{ValidatedJson, ValidatedQuery};

/// List addresses matching every given filter
#[utoipa::path(
    get,
    path = "/addresses",
    tag = "addresses",
    params(AddressQuery),
    responses(
        (status = 200, description = "List of addresses", body = Vec<Address>)
    )
)]
pub async fn list_addresses(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<AddressQuery>,
) -> AppResult<Json<Vec<Address>>> {
    let addresses = state.services.addresses.list(&query).await?;
    Ok(Json(addresses))
}

/// Get address by ID
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address details", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_address(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Address>> {
    let address = state.services.addresses.get_by_id(id).await?;
    Ok(Json(address))
}

/// Create address
#[utoipa::path(
    post,
    path = "/addresses",
    tag = "addresses",
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 400, description = "Duplicate address", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_address(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateAddress>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = state.services.addresses.create(data).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Partially update address
#[utoipa::path(
    patch,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = UpdateAddress,
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_address(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<UpdateAddress>,
) -> AppResult<Json<Address>> {
    let address = state.services.addresses.update(id, data).await?;
    Ok(Json(address))
}

/// Replace address
#[utoipa::path(
    put,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = ReplaceAddress,
    responses(
        (status = 200, description = "Address replaced", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_address(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<ReplaceAddress>,
) -> AppResult<Json<Address>> {
    let address = state.services.addresses.replace(id, data).await?;
    Ok(Json(address))
}

/// Delete address
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address deleted", body = MessageResponse),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_address(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.addresses.delete(id).await?;
    Ok(Json(MessageResponse::new("Address deleted successfully")))
}
