//! Person endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        person::{Person, PersonQuery, CreatePerson, ReplacePerson, UpdatePerson},
        MessageResponse,
    },
};

use super::{ValidatedJson, ValidatedQuery};

/// List persons, optionally filtered by the city or country of any address
#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    params(PersonQuery),
    responses(
        (status = 200, description = "List of persons", body = Vec<Person>)
    )
)]
pub async fn list_persons(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<PersonQuery>,
) -> AppResult<Json<Vec<Person>>> {
    let persons = state.services.persons.list(&query).await?;
    Ok(Json(persons))
}

/// Get person by ID
#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = Person),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.get_by_id(id).await?;
    Ok(Json(person))
}

/// Create person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Duplicate person", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_person(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = state.services.persons.create(data).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Partially update person
#[utoipa::path(
    patch,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.update(id, data).await?;
    Ok(Json(person))
}

/// Replace person
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    request_body = ReplacePerson,
    responses(
        (status = 200, description = "Person replaced", body = Person),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<ReplacePerson>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.replace(id, data).await?;
    Ok(Json(person))
}

/// Delete person
#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageResponse),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.persons.delete(id).await?;
    Ok(Json(MessageResponse::new("Person deleted successfully")))
}
